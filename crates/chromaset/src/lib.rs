#![forbid(unsafe_code)]

//! chromaset public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! common types from the internal crates, adds a [`Resolver`] that tracks the
//! selected scheme file, and offers a prelude for day-to-day usage.

use std::path::{Path, PathBuf};

// --- Color re-exports ------------------------------------------------------

pub use chromaset_color::{
    ColorParseError, Hcy, Rgba, contrast_ratio, darken, lighten, luma, mix, tint,
};

// --- Config re-exports -----------------------------------------------------

pub use chromaset_config::{ConfigError, ConfigGroup, DefaultConfigCache, SchemeConfig};

// --- Scheme re-exports -----------------------------------------------------

pub use chromaset_scheme::{
    BackgroundRole, ColorEffect, ColorSetKind, ContrastEffect, DEFAULT_CONTRAST, DecorationRole,
    ForegroundRole, IntensityEffect, PaletteGroup, ResolvedColorSet, SchemeSource, ShadeRole,
    StateEffects, StatefulBrush, SystemPalette, WidgetState, application_palette, contrast_f,
    is_color_set_supported, shade, shade_default, shades,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for chromaset APIs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A scheme file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A color literal could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Standard result type for chromaset APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Resolver --------------------------------------------------------------

/// Resolves color sets against the currently selected scheme.
///
/// The scheme file is read once and reused until the selection changes or
/// [`reload`](Self::reload) is called. With no scheme selected, sets are
/// built from the host [`SystemPalette`].
#[derive(Debug, Default)]
pub struct Resolver {
    scheme: Option<PathBuf>,
    palette: SystemPalette,
    cache: DefaultConfigCache,
}

impl Resolver {
    /// A resolver with no scheme selected and the default host palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a scheme file.
    #[must_use]
    pub fn with_scheme(mut self, path: impl Into<PathBuf>) -> Self {
        self.scheme = Some(path.into());
        self
    }

    /// Replace the host palette used when no scheme is selected.
    #[must_use]
    pub fn with_system_palette(mut self, palette: SystemPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Change (or clear) the selected scheme.
    pub fn set_scheme(&mut self, path: Option<PathBuf>) {
        tracing::debug!(scheme = ?path, "scheme selection changed");
        self.scheme = path;
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&Path> {
        self.scheme.as_deref()
    }

    /// Force the selected scheme to be reread on next use.
    pub fn reload(&mut self) {
        self.cache.invalidate();
    }

    /// Resolve `kind` in `state` against the selected scheme.
    pub fn resolve(&mut self, kind: ColorSetKind, state: WidgetState) -> Result<ResolvedColorSet> {
        let config = self.cache.get(self.scheme.as_deref())?;
        let source = match config.as_deref() {
            Some(config) => SchemeSource::Config(config),
            None => SchemeSource::System(&self.palette),
        };
        Ok(ResolvedColorSet::resolve_with(kind, state, source))
    }

    /// The scheme contrast, [`DEFAULT_CONTRAST`] when no scheme is selected.
    pub fn contrast(&mut self) -> Result<f64> {
        let config = self.cache.get(self.scheme.as_deref())?;
        Ok(contrast_f(config.as_deref()))
    }

    /// Number of times a scheme file has actually been read.
    #[must_use]
    pub fn loads(&self) -> u64 {
        self.cache.loads()
    }
}

/// Parse a color written as `r,g,b`, `r,g,b,a`, or hex.
pub fn parse_color(input: &str) -> Result<Rgba> {
    Ok(input.parse::<Rgba>()?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BackgroundRole, ColorSetKind, DecorationRole, Error, ForegroundRole, ResolvedColorSet,
        Resolver, Result, Rgba, SchemeConfig, ShadeRole, StatefulBrush, WidgetState,
    };

    pub use crate::{color, config, scheme};
}

pub use chromaset_color as color;
pub use chromaset_config as config;
pub use chromaset_scheme as scheme;

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn resolver_without_scheme_uses_palette() {
        let palette = SystemPalette::new(PaletteGroup {
            base: Rgba::rgb(1, 1, 1),
            ..PaletteGroup::default()
        });
        let mut resolver = Resolver::new().with_system_palette(palette);
        let set = resolver.resolve(ColorSetKind::View, WidgetState::Active).unwrap();
        assert_eq!(set.background(BackgroundRole::Normal), Rgba::rgb(1, 1, 1));
        assert_eq!(resolver.contrast().unwrap(), DEFAULT_CONTRAST);
        assert_eq!(resolver.loads(), 0);
    }

    #[test]
    fn resolver_caches_and_reloads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[Colors:View]\nBackgroundNormal=5,6,7\n").unwrap();

        let mut resolver = Resolver::new().with_scheme(file.path());
        assert_eq!(resolver.scheme(), Some(file.path()));
        for state in WidgetState::ALL {
            resolver.resolve(ColorSetKind::View, state).unwrap();
        }
        assert_eq!(resolver.loads(), 1);

        resolver.reload();
        let set = resolver.resolve(ColorSetKind::View, WidgetState::Active).unwrap();
        assert_eq!(set.background(BackgroundRole::Normal), Rgba::rgb(5, 6, 7));
        assert_eq!(resolver.loads(), 2);

        resolver.set_scheme(None);
        let set = resolver.resolve(ColorSetKind::View, WidgetState::Active).unwrap();
        assert_eq!(set.background(BackgroundRole::Normal), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn missing_scheme_is_a_config_error() {
        let mut resolver = Resolver::new().with_scheme("/no/such/scheme.colors");
        let err = resolver.resolve(ColorSetKind::View, WidgetState::Active).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Io { .. })));
    }

    #[test]
    #[tracing_test::traced_test]
    fn scheme_changes_are_logged() {
        let mut resolver = Resolver::new();
        resolver.set_scheme(Some(PathBuf::from("breeze.colors")));
        assert!(logs_contain("scheme selection changed"));
        assert!(logs_contain("breeze.colors"));
    }

    #[test]
    fn parse_color_accepts_both_notations() {
        assert_eq!(parse_color("#3daee9").unwrap(), Rgba::rgb(61, 174, 233));
        assert_eq!(parse_color("61,174,233").unwrap(), Rgba::rgb(61, 174, 233));
        assert!(matches!(parse_color("sky"), Err(Error::Color(_))));
    }
}
