#![forbid(unsafe_code)]

//! Color value type and perceptual color primitives for chromaset.
//!
//! # Role in chromaset
//! `chromaset-color` is the leaf of the workspace. It owns the single color
//! value type ([`Rgba`]) and the small set of perceptual operations the scheme
//! engine is built on. Nothing here knows about color sets, roles, or
//! configuration.
//!
//! # This crate provides
//! - [`Rgba`], a packed straight-alpha 32-bit color with hex parsing.
//! - [`Hcy`], the hue/chroma/luma space the primitives operate in.
//! - [`luma`], [`contrast_ratio`], [`lighten`], [`darken`], [`shade`],
//!   [`mix`], and [`tint`].
//!
//! # How it fits in the system
//! `chromaset-scheme` composes these primitives into state effects, derived
//! backgrounds, and bevel shades. Every primitive is a pure function of its
//! inputs and rounds its result back to 8 bits per channel.

/// Hue/chroma/luma color space.
pub mod hcy;
/// Packed RGBA color value type.
pub mod rgba;
/// Perceptual color primitives.
pub mod utils;

pub use hcy::Hcy;
pub use rgba::{ColorParseError, Rgba};
pub use utils::{contrast_ratio, darken, lighten, luma, mix, shade, tint};
