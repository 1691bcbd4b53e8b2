//! Built-in palette tables.
//!
//! These are the light default scheme's values. They are used for any role a
//! scheme file does not define, so a resolution always has a complete palette
//! even with no configuration at all.

use chromaset_color::Rgba;
use chromaset_config::ConfigGroup;

use crate::roles::{ColorSetKind, DecorationRole, ForegroundRole};

/// The stored (non-derived) colors of one color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredColors {
    pub normal_background: Rgba,
    pub alternate_background: Rgba,
    /// Indexed by [`ForegroundRole::index`].
    pub foreground: [Rgba; ForegroundRole::COUNT],
}

/// Decoration colors of one color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationColors {
    /// Indexed by [`DecorationRole::index`].
    pub colors: [Rgba; DecorationRole::COUNT],
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    Rgba::rgb(r, g, b)
}

const fn stored(normal: Rgba, alternate: Rgba, foreground: [Rgba; 8]) -> StoredColors {
    StoredColors {
        normal_background: normal,
        alternate_background: alternate,
        foreground,
    }
}

// Foreground order: normal, inactive, active, link, visited, negative,
// neutral, positive.
const LIGHT_TEXT: [Rgba; 8] = [
    rgb(35, 38, 41),
    rgb(112, 125, 138),
    rgb(61, 174, 233),
    rgb(41, 128, 185),
    rgb(155, 89, 182),
    rgb(218, 68, 83),
    rgb(246, 116, 0),
    rgb(39, 174, 96),
];

pub const VIEW: StoredColors = stored(rgb(255, 255, 255), rgb(247, 247, 247), LIGHT_TEXT);

pub const WINDOW: StoredColors = stored(rgb(239, 240, 241), rgb(227, 229, 231), LIGHT_TEXT);

pub const BUTTON: StoredColors = stored(rgb(252, 252, 252), rgb(163, 212, 250), LIGHT_TEXT);

pub const SELECTION: StoredColors = stored(
    rgb(61, 174, 233),
    rgb(163, 212, 250),
    [
        rgb(255, 255, 255),
        rgb(112, 125, 138),
        rgb(255, 255, 255),
        rgb(253, 188, 75),
        rgb(155, 89, 182),
        rgb(176, 55, 69),
        rgb(198, 92, 0),
        rgb(23, 104, 57),
    ],
);

pub const TOOLTIP: StoredColors = stored(rgb(247, 247, 247), rgb(239, 240, 241), LIGHT_TEXT);

pub const COMPLEMENTARY: StoredColors = stored(
    rgb(42, 46, 50),
    rgb(27, 30, 32),
    [
        rgb(252, 252, 252),
        rgb(161, 169, 177),
        rgb(61, 174, 233),
        rgb(29, 153, 243),
        rgb(155, 89, 182),
        rgb(218, 68, 83),
        rgb(246, 116, 0),
        rgb(39, 174, 96),
    ],
);

pub const HEADER: StoredColors = stored(rgb(222, 224, 226), rgb(239, 240, 241), LIGHT_TEXT);

pub const DECORATION: DecorationColors = DecorationColors {
    colors: [rgb(61, 174, 233), rgb(147, 206, 233)],
};

/// Override color for the disabled "Color" effect.
pub const DISABLED_EFFECT_COLOR: Rgba = rgb(56, 56, 56);

/// Override color for the inactive "Color" effect.
pub const INACTIVE_EFFECT_COLOR: Rgba = rgb(112, 111, 110);

/// Literal defaults for a color set.
#[must_use]
pub const fn literal(kind: ColorSetKind) -> StoredColors {
    match kind {
        ColorSetKind::View => VIEW,
        ColorSetKind::Window => WINDOW,
        ColorSetKind::Button => BUTTON,
        ColorSetKind::Selection => SELECTION,
        ColorSetKind::Tooltip => TOOLTIP,
        ColorSetKind::Complementary => COMPLEMENTARY,
        ColorSetKind::Header => HEADER,
    }
}

impl StoredColors {
    /// Read every stored color from `group`, each falling back to `self`.
    #[must_use]
    pub fn load(&self, group: &ConfigGroup<'_>) -> Self {
        let mut foreground = self.foreground;
        for role in ForegroundRole::ALL {
            if let Some(key) = role.config_key() {
                let slot = &mut foreground[role.index()];
                *slot = group.read_color(key, *slot);
            }
        }
        Self {
            normal_background: group.read_color("BackgroundNormal", self.normal_background),
            alternate_background: group
                .read_color("BackgroundAlternate", self.alternate_background),
            foreground,
        }
    }

    #[must_use]
    pub const fn foreground(&self, role: ForegroundRole) -> Rgba {
        self.foreground[role.index()]
    }
}

impl DecorationColors {
    /// Read both decoration colors from `group`, each falling back to `self`.
    #[must_use]
    pub fn load(&self, group: &ConfigGroup<'_>) -> Self {
        let mut colors = self.colors;
        for role in DecorationRole::ALL {
            if let Some(key) = role.config_key() {
                colors[role.index()] = group.read_color(key, colors[role.index()]);
            }
        }
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use chromaset_config::SchemeConfig;

    use super::*;

    #[test]
    fn load_from_empty_group_is_identity() {
        let config = SchemeConfig::empty();
        let group = config.group("Colors:View");
        assert_eq!(VIEW.load(&group), VIEW);
        assert_eq!(DECORATION.load(&group), DECORATION);
    }

    #[test]
    fn load_replaces_only_configured_entries() {
        let config = SchemeConfig::parse(
            "[Colors:Window]\nForegroundLink=1,2,3\nBackgroundAlternate=#101010\nDecorationHover=9,9,9\n",
        )
        .unwrap();
        let group = config.group("Colors:Window");
        let loaded = WINDOW.load(&group);
        assert_eq!(loaded.foreground(ForegroundRole::Link), Rgba::rgb(1, 2, 3));
        assert_eq!(loaded.alternate_background, Rgba::rgb(16, 16, 16));
        assert_eq!(loaded.normal_background, WINDOW.normal_background);
        assert_eq!(
            loaded.foreground(ForegroundRole::Normal),
            WINDOW.foreground(ForegroundRole::Normal)
        );

        let deco = DECORATION.load(&group);
        assert_eq!(deco.colors[DecorationRole::Hover.index()], Rgba::rgb(9, 9, 9));
        assert_eq!(
            deco.colors[DecorationRole::Focus.index()],
            DECORATION.colors[DecorationRole::Focus.index()]
        );
    }

    #[test]
    fn every_kind_has_a_literal_table() {
        for kind in ColorSetKind::ALL {
            let table = literal(kind);
            assert_ne!(table.normal_background, Rgba::TRANSPARENT);
        }
        assert_eq!(literal(ColorSetKind::Selection).normal_background, Rgba::rgb(61, 174, 233));
    }
}
