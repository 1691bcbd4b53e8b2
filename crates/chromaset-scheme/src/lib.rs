#![forbid(unsafe_code)]

//! Color set resolution, state effects, and bevel shading for chromaset.
//!
//! # Role in chromaset
//! Widgets ask for a *semantic* color: "the link text of a button in a
//! disabled window", "the dark bevel of a frame". This crate answers with a
//! concrete [`Rgba`](chromaset_color::Rgba), combining the scheme's stored
//! colors, built-in defaults, per-state effects, and derived backgrounds.
//!
//! # This crate provides
//! - [`ResolvedColorSet`], the immutable palette for one
//!   ([`ColorSetKind`], [`WidgetState`]) pair.
//! - [`StateEffects`], the inactive/disabled transforms.
//! - [`shade`] and [`shade_default`], the five bevel shades of a color.
//! - [`StatefulBrush`], one color per widget state.
//! - [`SystemPalette`], the host palette used when no scheme is selected, and
//!   [`application_palette`] to build one from a scheme.
//!
//! # How it fits in the system
//! Colors come from a [`SchemeConfig`](chromaset_config::SchemeConfig) (or a
//! [`SystemPalette`]) and are transformed with the `chromaset-color`
//! primitives. Resolution never fails: missing or malformed entries fall back
//! to defaults, and invalid indices clamp.

/// Built-in palette tables.
pub mod defaults;
/// Inactive and disabled color effects.
pub mod effects;
/// Host palette fallback.
pub mod palette;
/// Color set resolution.
pub mod resolve;
/// Color sets, widget states, and roles.
pub mod roles;
/// Bevel shades.
pub mod shade;
/// State-aware colors.
pub mod stateful;

pub use effects::{ColorEffect, ContrastEffect, IntensityEffect, StateEffects};
pub use palette::{PaletteGroup, SystemPalette};
pub use resolve::{
    DEFAULT_CONTRAST, ResolvedColorSet, SchemeSource, application_palette, contrast_f,
    is_color_set_supported,
};
pub use roles::{
    BackgroundRole, ColorSetKind, DecorationRole, ForegroundRole, ShadeRole, WidgetState,
};
pub use shade::{shade, shade_default, shades};
pub use stateful::StatefulBrush;
