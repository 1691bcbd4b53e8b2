//! Perceptual color primitives.
//!
//! These are the only color operations the scheme engine uses. Luma-based
//! adjustments (`lighten`, `darken`, `shade`) move a color along the HCY luma
//! axis and scale its chroma; `mix` and `tint` blend two colors.
//!
//! Chroma adjustment factors are multiplicative: `1.0` leaves chroma as is,
//! `0.0` removes it.

use crate::hcy::{Hcy, normalize};
use crate::rgba::Rgba;

/// Number of bisection steps [`tint`] takes to hit its target contrast.
const TINT_SEARCH_STEPS: u32 = 12;

#[inline]
fn mix_f(a: f64, b: f64, bias: f64) -> f64 {
    a + (b - a) * bias
}

/// Perceived brightness of a color in `[0.0, 1.0]`.
#[must_use]
pub fn luma(color: Rgba) -> f64 {
    Hcy::luma(color)
}

fn contrast_ratio_for_luma(y1: f64, y2: f64) -> f64 {
    if y1 > y2 {
        (y1 + 0.05) / (y2 + 0.05)
    } else {
        (y2 + 0.05) / (y1 + 0.05)
    }
}

/// Contrast ratio between two colors, in `[1.0, 21.0]`.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    contrast_ratio_for_luma(luma(a), luma(b))
}

/// Lighten by `ky` (fraction of the remaining distance to white) and move
/// chroma toward full by `1 - kc`.
#[must_use]
pub fn lighten(color: Rgba, ky: f64, kc: f64) -> Rgba {
    let mut c = Hcy::from_rgba(color);
    c.y = 1.0 - normalize((1.0 - c.y) * (1.0 - ky));
    c.c = 1.0 - normalize((1.0 - c.c) * kc);
    c.to_rgba()
}

/// Darken by `ky` (fraction of current luma removed) and scale chroma by `kc`.
#[must_use]
pub fn darken(color: Rgba, ky: f64, kc: f64) -> Rgba {
    let mut c = Hcy::from_rgba(color);
    c.y = normalize(c.y * (1.0 - ky));
    c.c = normalize(c.c * kc);
    c.to_rgba()
}

/// Shift luma by the signed amount `ky` and scale chroma by `kc`.
#[must_use]
pub fn shade(color: Rgba, ky: f64, kc: f64) -> Rgba {
    let mut c = Hcy::from_rgba(color);
    c.y = normalize(c.y + ky);
    c.c = normalize(c.c * kc);
    c.to_rgba()
}

/// Linear blend from `c1` (`bias = 0`) to `c2` (`bias = 1`), weighting color
/// channels by alpha.
///
/// A NaN bias returns `c1`.
#[must_use]
pub fn mix(c1: Rgba, c2: Rgba, bias: f64) -> Rgba {
    if bias.is_nan() || bias <= 0.0 {
        return c1;
    }
    if bias >= 1.0 {
        return c2;
    }

    let a1 = c1.alpha_f();
    let a2 = c2.alpha_f();
    let a = mix_f(a1, a2, bias);
    if a <= 0.0 {
        return Rgba::TRANSPARENT;
    }

    let channel = |x1: f64, x2: f64| mix_f(x1 * a1, x2 * a2, bias).clamp(0.0, 1.0) / a;
    Rgba::from_f64(
        channel(c1.red_f(), c2.red_f()),
        channel(c1.green_f(), c2.green_f()),
        channel(c1.blue_f(), c2.blue_f()),
        a,
    )
}

fn tint_helper(base: Rgba, base_luma: f64, color: Rgba, amount: f64) -> Rgba {
    let mut result = Hcy::from_rgba(mix(base, color, amount.powf(0.3)));
    result.y = mix_f(base_luma, result.y, amount);
    result.to_rgba()
}

/// Tint `base` toward `color`.
///
/// Unlike [`mix`], the result keeps most of the base luma and takes hue and
/// chroma from `color` aggressively, so a small amount is already clearly
/// visible. The blend is chosen by bisection so that its contrast against
/// `base` grows with the cube of `amount`.
///
/// A NaN amount returns `base`.
#[must_use]
pub fn tint(base: Rgba, color: Rgba, amount: f64) -> Rgba {
    if amount.is_nan() || amount <= 0.0 {
        return base;
    }
    if amount >= 1.0 {
        return color;
    }

    let base_luma = luma(base);
    let ri = contrast_ratio_for_luma(base_luma, luma(color));
    let rg = 1.0 + (ri + 1.0) * amount * amount * amount;

    let mut lower = 0.0;
    let mut upper = 1.0;
    let mut result = base;
    for _ in 0..TINT_SEARCH_STEPS {
        let a = 0.5 * (lower + upper);
        result = tint_helper(base, base_luma, color, a);
        let ra = contrast_ratio_for_luma(base_luma, luma(result));
        if ra > rg {
            upper = a;
        } else {
            lower = a;
        }
    }
    result
}
