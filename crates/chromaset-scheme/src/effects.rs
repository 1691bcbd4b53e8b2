//! Per-state color effects.
//!
//! Inactive and disabled widgets are drawn with the same palette as active
//! ones, passed through up to three effects read from the
//! `ColorEffects:Inactive` / `ColorEffects:Disabled` groups:
//!
//! - **Intensity** lightens, darkens, or shades the color.
//! - **Color** desaturates it, or fades/tints it toward an override color.
//! - **Contrast** (foregrounds only) pulls text toward its background.
//!
//! Effect ids are stored as integers in scheme files. Ids the engine does not
//! know are treated as "no effect".

use chromaset_color::{Rgba, darken, lighten, mix, shade, tint};
use chromaset_config::SchemeConfig;

use crate::defaults::{DISABLED_EFFECT_COLOR, INACTIVE_EFFECT_COLOR};
use crate::roles::WidgetState;

/// Brightness adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntensityEffect {
    #[default]
    None,
    Shade,
    Darken,
    Lighten,
}

impl IntensityEffect {
    /// Map a stored effect id; unknown ids are `None`.
    #[must_use]
    pub const fn from_id(id: i64) -> Self {
        match id {
            1 => Self::Shade,
            2 => Self::Darken,
            3 => Self::Lighten,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }
}

/// Hue and saturation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorEffect {
    #[default]
    None,
    Desaturate,
    Fade,
    Tint,
}

impl ColorEffect {
    /// Map a stored effect id; unknown ids are `None`.
    #[must_use]
    pub const fn from_id(id: i64) -> Self {
        match id {
            1 => Self::Desaturate,
            2 => Self::Fade,
            3 => Self::Tint,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }
}

/// Foreground-to-background contrast adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContrastEffect {
    #[default]
    None,
    Fade,
    Tint,
}

impl ContrastEffect {
    /// Map a stored effect id; unknown ids are `None`.
    #[must_use]
    pub const fn from_id(id: i64) -> Self {
        match id {
            1 => Self::Fade,
            2 => Self::Tint,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }
}

/// Chooses between the disabled and inactive flavor of a default.
#[derive(Clone, Copy)]
struct ByState(bool);

impl ByState {
    fn of<T>(self, disabled: T, inactive: T) -> T {
        if self.0 { disabled } else { inactive }
    }
}

/// The effects configured for one widget state.
///
/// `StateEffects` for [`WidgetState::Active`] is always the identity. For
/// the other states the effects come from the scheme's `ColorEffects:*`
/// group, or from the built-in defaults when no scheme is given:
///
/// | state    | on by default | intensity    | color            | contrast   |
/// |----------|---------------|--------------|------------------|------------|
/// | disabled | yes           | darken 0.10  | none             | fade 0.65  |
/// | inactive | no            | none         | desaturate -0.9  | tint 0.25  |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateEffects {
    pub intensity: IntensityEffect,
    pub intensity_amount: f64,
    pub color: ColorEffect,
    pub color_amount: f64,
    /// Target of the `Fade` and `Tint` color effects.
    pub color_target: Rgba,
    pub contrast: ContrastEffect,
    pub contrast_amount: f64,
}

impl StateEffects {
    /// Effects that leave every color unchanged.
    pub const NONE: Self = Self {
        intensity: IntensityEffect::None,
        intensity_amount: 0.0,
        color: ColorEffect::None,
        color_amount: 0.0,
        color_target: Rgba::TRANSPARENT,
        contrast: ContrastEffect::None,
        contrast_amount: 0.0,
    };

    /// Read the effects for `state` from `config` (built-in defaults when
    /// `None`).
    #[must_use]
    pub fn new(state: WidgetState, config: Option<&SchemeConfig>) -> Self {
        let empty;
        let config = match config {
            Some(config) => config,
            None => {
                empty = SchemeConfig::empty();
                &empty
            }
        };

        let (group_name, disabled) = match state {
            WidgetState::Active => return Self::NONE,
            WidgetState::Inactive => ("ColorEffects:Inactive", false),
            WidgetState::Disabled => ("ColorEffects:Disabled", true),
        };
        let group = config.group(group_name);

        if !group.read_bool("Enable", disabled) {
            tracing::debug!(state = state.name(), "state effects disabled");
            return Self::NONE;
        }

        let pick = ByState(disabled);
        let intensity = IntensityEffect::from_id(group.read_i64(
            "IntensityEffect",
            pick.of(IntensityEffect::Darken, IntensityEffect::None).id(),
        ));
        let color = ColorEffect::from_id(group.read_i64(
            "ColorEffect",
            pick.of(ColorEffect::None, ColorEffect::Desaturate).id(),
        ));
        let contrast = ContrastEffect::from_id(group.read_i64(
            "ContrastEffect",
            pick.of(ContrastEffect::Fade, ContrastEffect::Tint).id(),
        ));

        let color_target = if color == ColorEffect::None {
            Rgba::TRANSPARENT
        } else {
            group.read_color("Color", pick.of(DISABLED_EFFECT_COLOR, INACTIVE_EFFECT_COLOR))
        };

        Self {
            intensity,
            intensity_amount: group.read_f64("IntensityAmount", pick.of(0.10, 0.0)),
            color,
            color_amount: group.read_f64("ColorAmount", pick.of(0.0, -0.9)),
            color_target,
            contrast,
            contrast_amount: group.read_f64("ContrastAmount", pick.of(0.65, 0.25)),
        }
    }

    /// Whether every effect is `None`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.intensity == IntensityEffect::None
            && self.color == ColorEffect::None
            && self.contrast == ContrastEffect::None
    }

    /// Apply the intensity and color effects to a background color.
    #[must_use]
    pub fn brush(&self, background: Rgba) -> Rgba {
        let amount = self.intensity_amount;
        let color = match self.intensity {
            IntensityEffect::None => background,
            IntensityEffect::Shade => shade(background, amount, 1.0),
            IntensityEffect::Darken => darken(background, amount, 1.0),
            IntensityEffect::Lighten => lighten(background, amount, 1.0),
        };

        let amount = self.color_amount;
        match self.color {
            ColorEffect::None => color,
            ColorEffect::Desaturate => darken(color, 0.0, 1.0 - amount),
            ColorEffect::Fade => mix(color, self.color_target, amount),
            ColorEffect::Tint => tint(color, self.color_target, amount),
        }
    }

    /// Apply the contrast effect against `background`, then [`brush`](Self::brush).
    #[must_use]
    pub fn brush_foreground(&self, foreground: Rgba, background: Rgba) -> Rgba {
        let amount = self.contrast_amount;
        let color = match self.contrast {
            ContrastEffect::None => foreground,
            ContrastEffect::Fade => mix(foreground, background, amount),
            ContrastEffect::Tint => tint(foreground, background, amount),
        };
        self.brush(color)
    }
}
