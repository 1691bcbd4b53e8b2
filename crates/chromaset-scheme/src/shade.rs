//! Bevel shades for 3D frame decorations.
//!
//! A shade is the base color moved along the luma axis by a role-specific
//! amount. The amounts scale with the scheme contrast and with the base luma,
//! and near the ends of the luma range a separate table keeps all five shades
//! visibly distinct from the base.

use chromaset_color::{Rgba, darken, luma};

use crate::roles::ShadeRole;

/// Below this luma the base is treated as black.
const DARK_LUMA: f64 = 0.006;
/// Above this luma the base is treated as white.
const LIGHT_LUMA: f64 = 0.93;

/// Clamp contrast to `[-1, 1]`. NaN is treated as full contrast.
#[inline]
#[must_use]
pub fn normalize_contrast(contrast: f64) -> f64 {
    if contrast.is_nan() {
        1.0
    } else {
        contrast.clamp(-1.0, 1.0)
    }
}

/// Compute the `role` shade of `base`.
///
/// `contrast` is the scheme contrast (normally in `[0, 1]`, clamped into
/// `[-1, 1]`); `chroma_adjust` scales the chroma of the shifted color, with
/// `1.0` leaving it unchanged.
#[must_use]
pub fn shade(base: Rgba, role: ShadeRole, contrast: f64, chroma_adjust: f64) -> Rgba {
    let k = normalize_contrast(contrast);
    let y = luma(base);
    let yi = 1.0 - y;

    if y < DARK_LUMA {
        // Near black: every shade lightens.
        let amount = match role {
            ShadeRole::Light => 0.05 + 0.95 * k,
            ShadeRole::Mid => 0.01 + 0.20 * k,
            ShadeRole::Dark => 0.02 + 0.40 * k,
            ShadeRole::Midlight | ShadeRole::Shadow => 0.03 + 0.60 * k,
        };
        return chromaset_color::shade(base, amount, chroma_adjust);
    }

    if y > LIGHT_LUMA {
        // Near white: every shade darkens.
        let amount = match role {
            ShadeRole::Midlight => -0.02 - 0.20 * k,
            ShadeRole::Dark => -0.06 - 0.60 * k,
            ShadeRole::Shadow => -0.10 - 0.90 * k,
            ShadeRole::Light | ShadeRole::Mid => -0.04 - 0.40 * k,
        };
        return chromaset_color::shade(base, amount, chroma_adjust);
    }

    let light_amount = (0.05 + y * 0.55) * (0.25 + k * 0.75);
    let dark_amount = -y * (0.55 + k * 0.35);
    match role {
        ShadeRole::Light => chromaset_color::shade(base, light_amount, chroma_adjust),
        ShadeRole::Midlight => {
            chromaset_color::shade(base, (0.15 + 0.35 * yi) * light_amount, chroma_adjust)
        }
        ShadeRole::Mid => {
            chromaset_color::shade(base, (0.35 + 0.15 * y) * dark_amount, chroma_adjust)
        }
        ShadeRole::Dark => chromaset_color::shade(base, dark_amount, chroma_adjust),
        ShadeRole::Shadow => darken(
            chromaset_color::shade(base, dark_amount, chroma_adjust),
            0.5 + 0.3 * y,
            1.0,
        ),
    }
}

/// [`shade`] with the chroma left unchanged.
#[inline]
#[must_use]
pub fn shade_default(base: Rgba, role: ShadeRole, contrast: f64) -> Rgba {
    shade(base, role, contrast, 1.0)
}

/// All five shades of `base`, indexed by [`ShadeRole::index`].
#[must_use]
pub fn shades(base: Rgba, contrast: f64, chroma_adjust: f64) -> [Rgba; ShadeRole::COUNT] {
    let mut out = [base; ShadeRole::COUNT];
    for role in ShadeRole::ALL {
        out[role.index()] = shade(base, *role, contrast, chroma_adjust);
    }
    out
}
