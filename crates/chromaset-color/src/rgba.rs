//! Packed RGBA color value type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string was empty after trimming.
    #[error("empty color string")]
    Empty,
    /// A `#`-prefixed value had an unsupported digit count.
    #[error("hex color must have 3, 6, or 8 digits, got {digits}")]
    HexLength { digits: usize },
    /// A hex digit or decimal component was not a valid number.
    #[error("invalid color component {component:?}")]
    InvalidComponent { component: String },
    /// A comma-separated value did not have 3 or 4 components.
    #[error("expected 3 or 4 comma-separated components, got {count}")]
    ComponentCount { count: usize },
}

/// An sRGB color with straight (non-premultiplied) alpha, packed as
/// `0xRRGGBBAA`.
///
/// `Rgba` is `Copy` and compares bitwise, so two colors are equal exactly when
/// every channel matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create a color from floating point channels in `[0.0, 1.0]`.
    ///
    /// Out-of-range and NaN channels are clamped (NaN maps to 0).
    #[must_use]
    pub fn from_f64(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::rgba(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Red channel in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn red_f(self) -> f64 {
        f64::from(self.r()) / 255.0
    }

    /// Green channel in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn green_f(self) -> f64 {
        f64::from(self.g()) / 255.0
    }

    /// Blue channel in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn blue_f(self) -> f64 {
        f64::from(self.b()) / 255.0
    }

    /// Alpha channel in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn alpha_f(self) -> f64 {
        f64::from(self.a()) / 255.0
    }

    /// Return the same color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Whether the color is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r(),
                self.g(),
                self.b(),
                self.a()
            )
        }
    }

    /// Parse a `#rgb`, `#rrggbb`, or `#rrggbbaa` hex string.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let nibble = |idx: usize| -> Result<u8, ColorParseError> {
            digits
                .get(idx..idx + 1)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidComponent {
                    component: digits.to_string(),
                })
        };
        let byte = |idx: usize| -> Result<u8, ColorParseError> {
            Ok((nibble(idx)? << 4) | nibble(idx + 1)?)
        };
        match digits.len() {
            3 => {
                let r = nibble(0)?;
                let g = nibble(1)?;
                let b = nibble(2)?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            other => Err(ColorParseError::HexLength { digits: other }),
        }
    }

    /// Parse a decimal `r,g,b` or `r,g,b,a` triple (the scheme file format).
    pub fn from_components(input: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::ComponentCount { count: parts.len() });
        }
        let mut channels = [255u8; 4];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidComponent {
                    component: (*part).to_string(),
                })?;
        }
        Ok(Self::rgba(channels[0], channels[1], channels[2], channels[3]))
    }
}

#[inline]
fn unit_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Accepts either hex (`#rrggbb`) or decimal components (`r,g,b[,a]`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(ColorParseError::Empty)
        } else if trimmed.contains(',') {
            Self::from_components(trimmed)
        } else {
            Self::from_hex(trimmed)
        }
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip_through_packing() {
        let c = Rgba::rgba(12, 34, 56, 78);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (12, 34, 56, 78));
        assert_eq!(Rgba::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn hex_formats() {
        assert_eq!(Rgba::from_hex("#3daee9"), Ok(Rgba::rgb(61, 174, 233)));
        assert_eq!(Rgba::from_hex("fff"), Ok(Rgba::WHITE));
        assert_eq!(
            Rgba::from_hex("#00000080"),
            Ok(Rgba::rgba(0, 0, 0, 128))
        );
        assert_eq!(
            Rgba::from_hex("#12345"),
            Err(ColorParseError::HexLength { digits: 5 })
        );
        assert!(matches!(
            Rgba::from_hex("#zzzzzz"),
            Err(ColorParseError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn decimal_components() {
        assert_eq!("239,240,241".parse(), Ok(Rgba::rgb(239, 240, 241)));
        assert_eq!(" 1, 2, 3, 4 ".parse(), Ok(Rgba::rgba(1, 2, 3, 4)));
        assert_eq!(
            "1,2".parse::<Rgba>(),
            Err(ColorParseError::ComponentCount { count: 2 })
        );
        assert!(matches!(
            "1,2,300".parse::<Rgba>(),
            Err(ColorParseError::InvalidComponent { .. })
        ));
        assert_eq!("".parse::<Rgba>(), Err(ColorParseError::Empty));
    }

    #[test]
    fn display_uses_short_form_when_opaque() {
        assert_eq!(Rgba::rgb(35, 38, 41).to_string(), "#232629");
        assert_eq!(Rgba::rgba(35, 38, 41, 0).to_string(), "#23262900");
    }

    #[test]
    fn from_f64_clamps_and_rounds() {
        assert_eq!(Rgba::from_f64(2.0, -1.0, 0.5, f64::NAN), Rgba::rgba(255, 0, 128, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgba::rgb(61, 174, 233)).unwrap();
        assert_eq!(json, "\"#3daee9\"");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::rgb(61, 174, 233));
    }
}
