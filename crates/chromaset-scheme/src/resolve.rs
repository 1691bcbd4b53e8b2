//! Color set resolution.
//!
//! [`ResolvedColorSet::resolve`] turns a (color set, widget state, scheme)
//! triple into a complete palette:
//!
//! 1. pick the scheme group and the literal defaults for the set,
//! 2. read the stored colors, each falling back to its default,
//! 3. apply the inactive-selection tint and the state effects,
//! 4. derive the six tinted backgrounds from the final colors.
//!
//! The result is a plain `Copy` value; re-resolve to pick up scheme changes.

use chromaset_color::{Rgba, tint};
use chromaset_config::SchemeConfig;

use crate::defaults::{self, DecorationColors, StoredColors};
use crate::effects::StateEffects;
use crate::palette::{PaletteGroup, SystemPalette};
use crate::roles::{
    BackgroundRole, ColorSetKind, DecorationRole, ForegroundRole, ShadeRole, WidgetState,
};
use crate::shade::shade_default;

/// Contrast used when no scheme is available (`KDE/contrast=7`).
pub const DEFAULT_CONTRAST: f64 = 0.7;

/// How strongly derived backgrounds are tinted toward their foreground.
const DERIVED_TINT: f64 = 0.3;

/// How strongly inactive selections are tinted toward the selection color.
const SELECTION_TINT: f64 = 0.4;

/// Where a color set gets its colors from.
#[derive(Debug, Clone, Copy)]
pub enum SchemeSource<'a> {
    /// A scheme file's configuration.
    Config(&'a SchemeConfig),
    /// The host palette, used when no scheme is selected.
    System(&'a SystemPalette),
}

/// A fully resolved palette for one color set and widget state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedColorSet {
    foreground: [Rgba; ForegroundRole::COUNT],
    background: [Rgba; BackgroundRole::COUNT],
    decoration: [Rgba; DecorationRole::COUNT],
    contrast: f64,
}

/// The scheme contrast: `0.1 * KDE/contrast` (integer, default 7).
///
/// Without a scheme this is [`DEFAULT_CONTRAST`]. The value is returned as
/// stored; [`shade`](crate::shade::shade) clamps it when shading.
#[must_use]
pub fn contrast_f(config: Option<&SchemeConfig>) -> f64 {
    match config {
        Some(config) => 0.1 * config.group("KDE").read_i64("contrast", 7) as f64,
        None => DEFAULT_CONTRAST,
    }
}

/// Whether `config` defines the group for `kind`.
#[must_use]
pub fn is_color_set_supported(config: &SchemeConfig, kind: ColorSetKind) -> bool {
    config.has_group(kind.config_group())
}

/// Group and defaults chosen for a resolution, before any colors are read.
struct Source {
    group: &'static str,
    stored: StoredColors,
    decoration: DecorationColors,
    selection_tint: Option<Rgba>,
}

fn select_source(kind: ColorSetKind, state: WidgetState, config: &SchemeConfig) -> Source {
    let plain = |kind: ColorSetKind| Source {
        group: kind.config_group(),
        stored: defaults::literal(kind),
        decoration: defaults::DECORATION,
        selection_tint: None,
    };

    match kind {
        ColorSetKind::Selection => {
            let effects = config.group("ColorEffects:Inactive");
            let change_selection =
                effects.read_bool("ChangeSelectionColor", effects.read_bool("Enable", true));
            match state {
                WidgetState::Active => plain(ColorSetKind::Selection),
                WidgetState::Inactive if !change_selection => plain(ColorSetKind::Selection),
                WidgetState::Inactive => {
                    let target = config.group(ColorSetKind::Selection.config_group()).read_color(
                        "BackgroundNormal",
                        defaults::SELECTION.normal_background,
                    );
                    Source {
                        selection_tint: Some(target),
                        ..plain(ColorSetKind::Window)
                    }
                }
                WidgetState::Disabled => plain(ColorSetKind::Window),
            }
        }
        ColorSetKind::Header => {
            // Header inherits the scheme's window colors, not their literals.
            let window = config.group(ColorSetKind::Window.config_group());
            Source {
                group: ColorSetKind::Header.config_group(),
                stored: defaults::HEADER.load(&window),
                decoration: defaults::DECORATION.load(&window),
                selection_tint: None,
            }
        }
        other => plain(other),
    }
}

impl ResolvedColorSet {
    /// Resolve `kind` in `state` against `config`.
    ///
    /// With `None`, the set is built from [`SystemPalette::default`]. Use
    /// [`resolve_with`](Self::resolve_with) to supply a different host
    /// palette.
    #[must_use]
    pub fn resolve(kind: ColorSetKind, state: WidgetState, config: Option<&SchemeConfig>) -> Self {
        match config {
            Some(config) => Self::from_config(kind, state, config),
            None => Self::from_system_palette(kind, state, &SystemPalette::default()),
        }
    }

    /// Resolve `kind` in `state` against an explicit source.
    #[must_use]
    pub fn resolve_with(kind: ColorSetKind, state: WidgetState, source: SchemeSource<'_>) -> Self {
        match source {
            SchemeSource::Config(config) => Self::from_config(kind, state, config),
            SchemeSource::System(palette) => Self::from_system_palette(kind, state, palette),
        }
    }

    fn from_config(kind: ColorSetKind, state: WidgetState, config: &SchemeConfig) -> Self {
        let source = select_source(kind, state, config);

        let mut group = config.group(source.group);
        let mut has_inactive_palette = false;
        if state == WidgetState::Inactive {
            let inactive = group.group("Inactive");
            if inactive.exists() {
                group = inactive;
                has_inactive_palette = true;
            }
        }

        let stored = source.stored.load(&group);
        let decoration = source.decoration.load(&group);

        let mut foreground = stored.foreground;
        let mut decoration = decoration.colors;
        let mut normal_bg = stored.normal_background;
        let mut alternate_bg = stored.alternate_background;

        if let Some(target) = source.selection_tint {
            if has_inactive_palette {
                tracing::debug!(
                    group = source.group,
                    "nested inactive palette present, skipping selection tint"
                );
            } else {
                normal_bg = tint(normal_bg, target, SELECTION_TINT);
                alternate_bg = tint(alternate_bg, target, SELECTION_TINT);
            }
        }

        let apply_effects =
            state != WidgetState::Active && !(state == WidgetState::Inactive && has_inactive_palette);
        if apply_effects {
            let effects = StateEffects::new(state, Some(config));
            for color in foreground.iter_mut().chain(decoration.iter_mut()) {
                *color = effects.brush_foreground(*color, normal_bg);
            }
            normal_bg = effects.brush(normal_bg);
            alternate_bg = effects.brush(alternate_bg);
        }

        let mut background = [normal_bg; BackgroundRole::COUNT];
        background[BackgroundRole::Alternate.index()] = alternate_bg;
        for role in BackgroundRole::ALL {
            if let Some(fg) = role.derived_from() {
                background[role.index()] = tint(normal_bg, foreground[fg.index()], DERIVED_TINT);
            }
        }

        tracing::trace!(
            kind = kind.name(),
            state = state.name(),
            has_inactive_palette,
            apply_effects,
            "resolved color set"
        );

        Self {
            foreground,
            background,
            decoration,
            contrast: contrast_f(Some(config)),
        }
    }

    fn from_system_palette(kind: ColorSetKind, state: WidgetState, palette: &SystemPalette) -> Self {
        let group: &PaletteGroup = palette.group(state);
        let (_, bg) = group.pair_for(kind);

        let mut background = [bg; BackgroundRole::COUNT];
        background[BackgroundRole::Alternate.index()] = group.alternate_base;

        Self {
            foreground: group.foregrounds(kind),
            background,
            decoration: group.decorations(),
            contrast: DEFAULT_CONTRAST,
        }
    }

    #[inline]
    #[must_use]
    pub const fn foreground(&self, role: ForegroundRole) -> Rgba {
        self.foreground[role.index()]
    }

    #[inline]
    #[must_use]
    pub const fn background(&self, role: BackgroundRole) -> Rgba {
        self.background[role.index()]
    }

    #[inline]
    #[must_use]
    pub const fn decoration(&self, role: DecorationRole) -> Rgba {
        self.decoration[role.index()]
    }

    /// Foreground by raw index; out-of-range indices read the normal text.
    #[must_use]
    pub fn foreground_at(&self, index: usize) -> Rgba {
        self.foreground(ForegroundRole::from_index(index))
    }

    /// Background by raw index; out-of-range indices read the normal background.
    #[must_use]
    pub fn background_at(&self, index: usize) -> Rgba {
        self.background(BackgroundRole::from_index(index))
    }

    /// Decoration by raw index; out-of-range indices read the focus color.
    #[must_use]
    pub fn decoration_at(&self, index: usize) -> Rgba {
        self.decoration(DecorationRole::from_index(index))
    }

    /// The scheme contrast this set was resolved with.
    #[inline]
    #[must_use]
    pub const fn contrast(&self) -> f64 {
        self.contrast
    }

    /// Shade of the normal background at this set's contrast.
    #[must_use]
    pub fn shade(&self, role: ShadeRole) -> Rgba {
        shade_default(self.background(BackgroundRole::Normal), role, self.contrast)
    }

    /// All foregrounds in role order.
    #[must_use]
    pub const fn foregrounds(&self) -> &[Rgba; ForegroundRole::COUNT] {
        &self.foreground
    }

    /// All backgrounds in role order.
    #[must_use]
    pub const fn backgrounds(&self) -> &[Rgba; BackgroundRole::COUNT] {
        &self.background
    }

    /// All decorations in role order.
    #[must_use]
    pub const fn decorations(&self) -> &[Rgba; DecorationRole::COUNT] {
        &self.decoration
    }
}

/// Build a host palette from a scheme, one group per widget state.
///
/// Tooltips use their active colors in every state.
#[must_use]
pub fn application_palette(config: Option<&SchemeConfig>) -> SystemPalette {
    let tooltip = ResolvedColorSet::resolve(ColorSetKind::Tooltip, WidgetState::Active, config);

    let mut palette = SystemPalette::default();
    for state in WidgetState::ALL {
        let set = |kind| ResolvedColorSet::resolve(kind, state, config);
        let view = set(ColorSetKind::View);
        let window = set(ColorSetKind::Window);
        let button = set(ColorSetKind::Button);
        let selection = set(ColorSetKind::Selection);

        let normal_fg = ForegroundRole::Normal;
        let normal_bg = BackgroundRole::Normal;
        let group = PaletteGroup {
            window: window.background(normal_bg),
            window_text: window.foreground(normal_fg),
            base: view.background(normal_bg),
            alternate_base: view.background(BackgroundRole::Alternate),
            text: view.foreground(normal_fg),
            button: button.background(normal_bg),
            button_text: button.foreground(normal_fg),
            highlight: selection.background(normal_bg),
            highlighted_text: selection.foreground(normal_fg),
            tooltip_base: tooltip.background(normal_bg),
            tooltip_text: tooltip.foreground(normal_fg),
            link: view.foreground(ForegroundRole::Link),
            link_visited: view.foreground(ForegroundRole::Visited),
            placeholder_text: view.foreground(ForegroundRole::Inactive),
            accent: selection.background(normal_bg),
            light: window.shade(ShadeRole::Light),
            midlight: window.shade(ShadeRole::Midlight),
            mid: window.shade(ShadeRole::Mid),
            dark: window.shade(ShadeRole::Dark),
            shadow: window.shade(ShadeRole::Shadow),
        };
        palette = palette.with_group(state, group);
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_defaults() {
        assert_eq!(contrast_f(None), DEFAULT_CONTRAST);
        assert!((contrast_f(Some(&SchemeConfig::empty())) - 0.7).abs() < 1e-12);
        let config = SchemeConfig::empty().with_entry(&["KDE"], "contrast", "3");
        assert!((contrast_f(Some(&config)) - 0.3).abs() < 1e-12);
        let junk = SchemeConfig::empty().with_entry(&["KDE"], "contrast", "high");
        assert!((contrast_f(Some(&junk)) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_contrast_is_stored_raw() {
        let config = SchemeConfig::empty().with_entry(&["KDE"], "contrast", "25");
        let set = ResolvedColorSet::resolve(ColorSetKind::View, WidgetState::Active, Some(&config));
        assert!((set.contrast() - 2.5).abs() < 1e-12);
        assert_eq!(
            set.shade(ShadeRole::Dark),
            shade_default(set.background(BackgroundRole::Normal), ShadeRole::Dark, 1.0)
        );
    }

    #[test]
    fn empty_config_active_uses_literals() {
        let config = SchemeConfig::empty();
        for kind in ColorSetKind::ALL {
            let set = ResolvedColorSet::resolve(kind, WidgetState::Active, Some(&config));
            let table = defaults::literal(kind);
            assert_eq!(set.background(BackgroundRole::Normal), table.normal_background);
            assert_eq!(set.background(BackgroundRole::Alternate), table.alternate_background);
            for role in ForegroundRole::ALL {
                assert_eq!(set.foreground(*role), table.foreground(*role), "{kind:?} {role:?}");
            }
            assert_eq!(set.decorations(), &defaults::DECORATION.colors);
        }
    }

    #[test]
    fn header_inherits_configured_window_colors() {
        let config = SchemeConfig::empty()
            .with_entry(&["Colors:Window"], "BackgroundNormal", "10,20,30")
            .with_entry(&["Colors:Window"], "DecorationFocus", "1,1,1")
            .with_entry(&["Colors:Header"], "ForegroundNormal", "200,0,0");
        let header = ResolvedColorSet::resolve(ColorSetKind::Header, WidgetState::Active, Some(&config));
        assert_eq!(header.background(BackgroundRole::Normal), Rgba::rgb(10, 20, 30));
        assert_eq!(header.decoration(DecorationRole::Focus), Rgba::rgb(1, 1, 1));
        assert_eq!(header.foreground(ForegroundRole::Normal), Rgba::rgb(200, 0, 0));
        // Unset in both groups: Header's own literal.
        assert_eq!(
            header.background(BackgroundRole::Alternate),
            defaults::HEADER.alternate_background
        );
    }

    #[test]
    fn disabled_selection_uses_window_without_tint() {
        let config = SchemeConfig::empty();
        let selection =
            ResolvedColorSet::resolve(ColorSetKind::Selection, WidgetState::Disabled, Some(&config));
        let window =
            ResolvedColorSet::resolve(ColorSetKind::Window, WidgetState::Disabled, Some(&config));
        assert_eq!(selection, window);
    }

    #[test]
    fn inactive_selection_respects_change_selection_color() {
        let config = SchemeConfig::empty()
            .with_entry(&["ColorEffects:Inactive"], "ChangeSelectionColor", "false");
        let set = ResolvedColorSet::resolve(ColorSetKind::Selection, WidgetState::Inactive, Some(&config));
        assert_eq!(set.background(BackgroundRole::Normal), defaults::SELECTION.normal_background);

        // Falls back to `Enable` when unset.
        let config = SchemeConfig::empty().with_entry(&["ColorEffects:Inactive"], "Enable", "false");
        let set = ResolvedColorSet::resolve(ColorSetKind::Selection, WidgetState::Inactive, Some(&config));
        assert_eq!(set.background(BackgroundRole::Normal), defaults::SELECTION.normal_background);
    }

    #[test]
    fn nested_inactive_palette_skips_effects() {
        let config = SchemeConfig::empty()
            .with_entry(&["ColorEffects:Inactive"], "Enable", "true")
            .with_entry(&["Colors:View", "Inactive"], "BackgroundNormal", "1,2,3");
        let set = ResolvedColorSet::resolve(ColorSetKind::View, WidgetState::Inactive, Some(&config));
        assert_eq!(set.background(BackgroundRole::Normal), Rgba::rgb(1, 2, 3));
        assert_eq!(
            set.foreground(ForegroundRole::Normal),
            defaults::VIEW.foreground(ForegroundRole::Normal)
        );
    }

    #[test]
    fn nested_inactive_palette_is_ignored_for_other_states() {
        let config = SchemeConfig::empty()
            .with_entry(&["Colors:View", "Inactive"], "BackgroundNormal", "1,2,3");
        let set = ResolvedColorSet::resolve(ColorSetKind::View, WidgetState::Active, Some(&config));
        assert_eq!(set.background(BackgroundRole::Normal), defaults::VIEW.normal_background);
    }

    #[test]
    fn disabled_effects_use_pre_effect_background() {
        let config = SchemeConfig::empty();
        let set = ResolvedColorSet::resolve(ColorSetKind::View, WidgetState::Disabled, Some(&config));
        let effects = StateEffects::new(WidgetState::Disabled, Some(&config));
        let fg = defaults::VIEW.foreground(ForegroundRole::Normal);
        let bg = defaults::VIEW.normal_background;
        assert_eq!(set.foreground(ForegroundRole::Normal), effects.brush_foreground(fg, bg));
        assert_eq!(
            set.decoration(DecorationRole::Hover),
            effects.brush_foreground(defaults::DECORATION.colors[1], bg)
        );
        assert_eq!(set.background(BackgroundRole::Normal), effects.brush(bg));
    }

    #[test]
    fn index_accessors_clamp() {
        let set = ResolvedColorSet::resolve(ColorSetKind::View, WidgetState::Active, None);
        assert_eq!(set.foreground_at(3), set.foreground(ForegroundRole::Link));
        assert_eq!(set.foreground_at(100), set.foreground(ForegroundRole::Normal));
        assert_eq!(set.background_at(100), set.background(BackgroundRole::Normal));
        assert_eq!(set.decoration_at(1), set.decoration(DecorationRole::Hover));
        assert_eq!(set.decoration_at(2), set.decoration(DecorationRole::Focus));
    }

    #[test]
    fn color_set_support_follows_groups() {
        let config = SchemeConfig::empty().with_entry(&["Colors:Button"], "BackgroundNormal", "1,1,1");
        assert!(is_color_set_supported(&config, ColorSetKind::Button));
        assert!(!is_color_set_supported(&config, ColorSetKind::View));
    }

    #[test]
    fn application_palette_takes_normal_roles() {
        // The host path has no inactive text of its own.
        let palette = application_palette(None);
        let group = palette.group(WidgetState::Active);
        let default = PaletteGroup::default();
        assert_eq!(group, &PaletteGroup { placeholder_text: default.text, ..default });

        let config = SchemeConfig::empty().with_entry(&["Colors:View"], "BackgroundNormal", "9,9,9");
        let palette = application_palette(Some(&config));
        assert_eq!(palette.group(WidgetState::Active).base, Rgba::rgb(9, 9, 9));
        assert_ne!(
            palette.group(WidgetState::Disabled).text,
            palette.group(WidgetState::Active).text
        );
        assert_eq!(
            palette.group(WidgetState::Disabled).tooltip_base,
            palette.group(WidgetState::Active).tooltip_base
        );
    }

    #[test]
    fn application_palette_carries_window_shades_and_accent() {
        let config = SchemeConfig::empty()
            .with_entry(&["KDE"], "contrast", "3")
            .with_entry(&["Colors:Window"], "BackgroundNormal", "90,100,110")
            .with_entry(&["Colors:View"], "ForegroundInactive", "7,8,9");
        let palette = application_palette(Some(&config));
        for state in WidgetState::ALL {
            let group = palette.group(state);
            let window = ResolvedColorSet::resolve(ColorSetKind::Window, state, Some(&config));
            let view = ResolvedColorSet::resolve(ColorSetKind::View, state, Some(&config));
            let selection = ResolvedColorSet::resolve(ColorSetKind::Selection, state, Some(&config));
            assert_eq!(group.light, window.shade(ShadeRole::Light), "{state:?}");
            assert_eq!(group.midlight, window.shade(ShadeRole::Midlight), "{state:?}");
            assert_eq!(group.mid, window.shade(ShadeRole::Mid), "{state:?}");
            assert_eq!(group.dark, window.shade(ShadeRole::Dark), "{state:?}");
            assert_eq!(group.shadow, window.shade(ShadeRole::Shadow), "{state:?}");
            assert_eq!(group.placeholder_text, view.foreground(ForegroundRole::Inactive));
            assert_eq!(group.accent, selection.background(BackgroundRole::Normal));
        }
        assert_eq!(palette.group(WidgetState::Active).placeholder_text, Rgba::rgb(7, 8, 9));
    }
}
