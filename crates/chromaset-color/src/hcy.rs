//! Hue/chroma/luma (HCY) color space.
//!
//! HCY is a cylindrical transform of gamma-linearized RGB where `y` is the
//! Rec. 709 weighted luma and `c` is chroma relative to the largest chroma
//! available at that hue and luma. Keeping luma as an axis lets the
//! primitives change perceived brightness without shifting hue.

use crate::rgba::Rgba;

/// Rec. 709 luma weights for red, green, blue.
const YC: [f64; 3] = [0.2126, 0.7152, 0.0722];

const GAMMA: f64 = 2.2;

/// Clamp into `[0.0, 1.0]`, mapping NaN to 0.
#[inline]
pub(crate) fn normalize(a: f64) -> f64 {
    if a < 1.0 {
        if a > 0.0 { a } else { 0.0 }
    } else {
        1.0
    }
}

/// Wrap into `[0.0, 1.0)`.
#[inline]
fn wrap(a: f64) -> f64 {
    let r = a % 1.0;
    if r < 0.0 {
        1.0 + r
    } else if r > 0.0 {
        r
    } else {
        0.0
    }
}

#[inline]
fn gamma(n: f64) -> f64 {
    normalize(n).powf(GAMMA)
}

#[inline]
fn igamma(n: f64) -> f64 {
    normalize(n).powf(1.0 / GAMMA)
}

#[inline]
fn lumag(r: f64, g: f64, b: f64) -> f64 {
    r * YC[0] + g * YC[1] + b * YC[2]
}

/// A color in HCY space. All components are nominally in `[0.0, 1.0]`;
/// conversion back to [`Rgba`] normalizes them first, so callers may push
/// components out of range while composing adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hcy {
    /// Hue, wrapping in `[0.0, 1.0)`.
    pub h: f64,
    /// Chroma.
    pub c: f64,
    /// Luma.
    pub y: f64,
    /// Alpha, carried through unchanged.
    pub a: f64,
}

impl Hcy {
    /// Convert from sRGB.
    #[must_use]
    pub fn from_rgba(color: Rgba) -> Self {
        let r = gamma(color.red_f());
        let g = gamma(color.green_f());
        let b = gamma(color.blue_f());
        let a = color.alpha_f();

        let y = lumag(r, g, b);

        let p = r.max(g).max(b);
        let n = r.min(g).min(b);
        let d = 6.0 * (p - n);
        let h = if n == p {
            0.0
        } else if r == p {
            (g - b) / d
        } else if g == p {
            (b - r) / d + 1.0 / 3.0
        } else {
            (r - g) / d + 2.0 / 3.0
        };

        let c = if r == g && g == b {
            0.0
        } else {
            ((y - n) / y).max((p - y) / (1.0 - y))
        };

        Self { h, c, y, a }
    }

    /// Convert back to sRGB, normalizing out-of-range components.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = wrap(self.h);
        let c = normalize(self.c);
        let y = normalize(self.y);

        let hs = h * 6.0;
        let (th, tm) = if hs < 1.0 {
            (hs, YC[0] + YC[1] * hs)
        } else if hs < 2.0 {
            let th = 2.0 - hs;
            (th, YC[1] + YC[0] * th)
        } else if hs < 3.0 {
            let th = hs - 2.0;
            (th, YC[1] + YC[2] * th)
        } else if hs < 4.0 {
            let th = 4.0 - hs;
            (th, YC[2] + YC[1] * th)
        } else if hs < 5.0 {
            let th = hs - 4.0;
            (th, YC[2] + YC[0] * th)
        } else {
            let th = 6.0 - hs;
            (th, YC[0] + YC[2] * th)
        };

        // Channels in sorted order: p (largest), o (middle), n (smallest).
        let (tn, to, tp) = if tm >= y {
            (
                y - y * c,
                y + y * c * (th - tm) / tm,
                y + y * c * (1.0 - tm) / tm,
            )
        } else {
            (
                y - (1.0 - y) * c * tm / (1.0 - tm),
                y + (1.0 - y) * c * (th - tm) / (1.0 - tm),
                y + (1.0 - y) * c,
            )
        };

        let (r, g, b) = if hs < 1.0 {
            (tp, to, tn)
        } else if hs < 2.0 {
            (to, tp, tn)
        } else if hs < 3.0 {
            (tn, tp, to)
        } else if hs < 4.0 {
            (tn, to, tp)
        } else if hs < 5.0 {
            (to, tn, tp)
        } else {
            (tp, tn, to)
        };

        Rgba::from_f64(igamma(r), igamma(g), igamma(b), self.a)
    }

    /// Luma of an sRGB color without computing hue or chroma.
    #[must_use]
    pub fn luma(color: Rgba) -> f64 {
        lumag(
            gamma(color.red_f()),
            gamma(color.green_f()),
            gamma(color.blue_f()),
        )
    }
}

impl From<Rgba> for Hcy {
    fn from(color: Rgba) -> Self {
        Self::from_rgba(color)
    }
}

impl From<Hcy> for Rgba {
    fn from(hcy: Hcy) -> Self {
        hcy.to_rgba()
    }
}
