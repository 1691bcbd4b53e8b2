//! Memoization of the "default" scheme configuration.
//!
//! Applications usually resolve every color against the same scheme file, so
//! re-reading it for each lookup would be wasteful. [`DefaultConfigCache`]
//! keeps the most recently opened scheme and reopens only when the requested
//! path changes.
//!
//! The cache is a plain value owned by its caller. Keep one per thread (or
//! per resolver) and pass it where it is needed; nothing in this crate holds
//! a process-wide cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::scheme_config::SchemeConfig;

#[derive(Debug, Default)]
pub struct DefaultConfigCache {
    entry: Option<(PathBuf, Arc<SchemeConfig>)>,
    loads: u64,
}

impl DefaultConfigCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration for `path`.
    ///
    /// `None` (or an empty path) means no scheme is selected; the caller
    /// should fall back to the ambient system palette, so `Ok(None)` is
    /// returned and any cached entry is kept for later.
    pub fn get(&mut self, path: Option<&Path>) -> Result<Option<Arc<SchemeConfig>>> {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(None);
        };

        if let Some((cached_path, config)) = &self.entry {
            if cached_path == path {
                return Ok(Some(Arc::clone(config)));
            }
        }

        let config = Arc::new(SchemeConfig::load(path)?);
        self.loads += 1;
        tracing::debug!(path = %path.display(), loads = self.loads, "default scheme cache miss");
        self.entry = Some((path.to_path_buf(), Arc::clone(&config)));
        Ok(Some(config))
    }

    /// Whether `path` is the currently cached scheme.
    #[must_use]
    pub fn is_cached(&self, path: &Path) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|(cached, _)| cached == path)
    }

    /// Number of times a scheme file was actually read.
    #[must_use]
    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Drop the cached scheme so the next [`get`](Self::get) rereads it.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
