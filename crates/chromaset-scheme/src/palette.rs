//! The ambient system palette.
//!
//! When no scheme is selected, color sets are filled from whatever palette the
//! host environment already uses. [`SystemPalette`] is that palette: one
//! [`PaletteGroup`] of toolkit-style roles per widget state.

use chromaset_color::Rgba;

use crate::defaults;
use crate::resolve::DEFAULT_CONTRAST;
use crate::roles::{ColorSetKind, DecorationRole, ForegroundRole, ShadeRole, WidgetState};
use crate::shade::shades;

/// Toolkit palette roles for one widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteGroup {
    pub window: Rgba,
    pub window_text: Rgba,
    pub base: Rgba,
    pub alternate_base: Rgba,
    pub text: Rgba,
    pub button: Rgba,
    pub button_text: Rgba,
    pub highlight: Rgba,
    pub highlighted_text: Rgba,
    pub tooltip_base: Rgba,
    pub tooltip_text: Rgba,
    pub link: Rgba,
    pub link_visited: Rgba,
    pub placeholder_text: Rgba,
    pub accent: Rgba,
    /// Bevel shades of the window background.
    pub light: Rgba,
    pub midlight: Rgba,
    pub mid: Rgba,
    pub dark: Rgba,
    pub shadow: Rgba,
}

impl Default for PaletteGroup {
    /// Built from the light default tables.
    fn default() -> Self {
        let normal = ForegroundRole::Normal;
        let bevel = shades(defaults::WINDOW.normal_background, DEFAULT_CONTRAST, 1.0);
        Self {
            window: defaults::WINDOW.normal_background,
            window_text: defaults::WINDOW.foreground(normal),
            base: defaults::VIEW.normal_background,
            alternate_base: defaults::VIEW.alternate_background,
            text: defaults::VIEW.foreground(normal),
            button: defaults::BUTTON.normal_background,
            button_text: defaults::BUTTON.foreground(normal),
            highlight: defaults::SELECTION.normal_background,
            highlighted_text: defaults::SELECTION.foreground(normal),
            tooltip_base: defaults::TOOLTIP.normal_background,
            tooltip_text: defaults::TOOLTIP.foreground(normal),
            link: defaults::VIEW.foreground(ForegroundRole::Link),
            link_visited: defaults::VIEW.foreground(ForegroundRole::Visited),
            placeholder_text: defaults::VIEW.foreground(ForegroundRole::Inactive),
            accent: defaults::SELECTION.normal_background,
            light: bevel[ShadeRole::Light.index()],
            midlight: bevel[ShadeRole::Midlight.index()],
            mid: bevel[ShadeRole::Mid.index()],
            dark: bevel[ShadeRole::Dark.index()],
            shadow: bevel[ShadeRole::Shadow.index()],
        }
    }
}

impl PaletteGroup {
    /// The (foreground, background) pair a color set draws from.
    #[must_use]
    pub const fn pair_for(&self, kind: ColorSetKind) -> (Rgba, Rgba) {
        match kind {
            ColorSetKind::View => (self.text, self.base),
            ColorSetKind::Button => (self.button_text, self.button),
            ColorSetKind::Selection => (self.highlighted_text, self.highlight),
            ColorSetKind::Tooltip => (self.tooltip_text, self.tooltip_base),
            ColorSetKind::Window | ColorSetKind::Complementary | ColorSetKind::Header => {
                (self.window_text, self.window)
            }
        }
    }

    /// Foreground colors for `kind`, indexed by [`ForegroundRole::index`].
    ///
    /// Links come from the palette's link roles; every other role is the
    /// set's plain foreground.
    #[must_use]
    pub fn foregrounds(&self, kind: ColorSetKind) -> [Rgba; ForegroundRole::COUNT] {
        let (text, _) = self.pair_for(kind);
        let mut out = [text; ForegroundRole::COUNT];
        out[ForegroundRole::Link.index()] = self.link;
        out[ForegroundRole::Visited.index()] = self.link_visited;
        out
    }

    /// Decoration colors: both focus and hover use the highlight.
    #[must_use]
    pub const fn decorations(&self) -> [Rgba; DecorationRole::COUNT] {
        [self.highlight; DecorationRole::COUNT]
    }
}

/// The host palette, one group per widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemPalette {
    groups: [PaletteGroup; 3],
}

impl SystemPalette {
    /// A palette using `group` for every state.
    #[must_use]
    pub const fn new(group: PaletteGroup) -> Self {
        Self {
            groups: [group; 3],
        }
    }

    /// Replace the group used for `state`.
    #[must_use]
    pub const fn with_group(mut self, state: WidgetState, group: PaletteGroup) -> Self {
        self.groups[state as usize] = group;
        self
    }

    #[must_use]
    pub const fn group(&self, state: WidgetState) -> &PaletteGroup {
        &self.groups[state as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_uses_light_tables() {
        let palette = SystemPalette::default();
        let group = palette.group(WidgetState::Active);
        assert_eq!(group.base, Rgba::rgb(255, 255, 255));
        assert_eq!(group.text, Rgba::rgb(35, 38, 41));
        assert_eq!(group.highlight, Rgba::rgb(61, 174, 233));
        assert_eq!(group.window, Rgba::rgb(239, 240, 241));
        assert_eq!(group.placeholder_text, defaults::VIEW.foreground(ForegroundRole::Inactive));
        assert_eq!(group.accent, group.highlight);
    }

    #[test]
    fn default_bevel_shades_window_at_default_contrast() {
        let group = PaletteGroup::default();
        let window = defaults::WINDOW.normal_background;
        assert_eq!(group.mid, crate::shade_default(window, ShadeRole::Mid, DEFAULT_CONTRAST));
        assert!(chromaset_color::luma(group.light) >= chromaset_color::luma(group.mid));
        assert!(chromaset_color::luma(group.dark) >= chromaset_color::luma(group.shadow));
    }

    #[test]
    fn kinds_map_to_toolkit_roles() {
        let group = PaletteGroup::default();
        assert_eq!(group.pair_for(ColorSetKind::View), (group.text, group.base));
        assert_eq!(
            group.pair_for(ColorSetKind::Selection),
            (group.highlighted_text, group.highlight)
        );
        assert_eq!(
            group.pair_for(ColorSetKind::Complementary),
            group.pair_for(ColorSetKind::Window)
        );
        assert_eq!(group.pair_for(ColorSetKind::Header), (group.window_text, group.window));
    }

    #[test]
    fn links_come_from_link_roles() {
        let group = PaletteGroup {
            link: Rgba::rgb(0, 0, 255),
            link_visited: Rgba::rgb(128, 0, 128),
            ..PaletteGroup::default()
        };
        let fg = group.foregrounds(ColorSetKind::Button);
        assert_eq!(fg[ForegroundRole::Link.index()], Rgba::rgb(0, 0, 255));
        assert_eq!(fg[ForegroundRole::Visited.index()], Rgba::rgb(128, 0, 128));
        assert_eq!(fg[ForegroundRole::Negative.index()], group.button_text);
        assert_eq!(group.decorations(), [group.highlight; 2]);
    }

    #[test]
    fn groups_are_per_state() {
        let disabled = PaletteGroup {
            text: Rgba::rgb(150, 150, 150),
            ..PaletteGroup::default()
        };
        let palette = SystemPalette::default().with_group(WidgetState::Disabled, disabled);
        assert_eq!(palette.group(WidgetState::Disabled).text, Rgba::rgb(150, 150, 150));
        assert_eq!(palette.group(WidgetState::Active), &PaletteGroup::default());
    }
}
