#![forbid(unsafe_code)]

//! Scheme configuration source for chromaset.
//!
//! # Role in chromaset
//! The resolution engine never touches files. It reads colors, flags, and
//! numbers through [`ConfigGroup`] lookups that always succeed and fall back
//! to caller-supplied defaults. This crate supplies that lookup surface over
//! the INI-style scheme format:
//!
//! ```text
//! [Colors:View]
//! BackgroundNormal=255,255,255
//! ForegroundNormal=35,38,41
//!
//! [Colors:View][Inactive]
//! BackgroundNormal=#f7f7f7
//!
//! [KDE]
//! contrast=4
//! ```
//!
//! # This crate provides
//! - [`SchemeConfig`], an immutable parsed scheme (groups, nested groups,
//!   entries).
//! - [`ConfigGroup`], a borrowed view with typed reads.
//! - [`DefaultConfigCache`], the per-caller memo for the "default" scheme.
//! - [`ConfigError`] for load and parse failures.

/// Default-configuration memoization.
pub mod cache;
/// Load and parse errors.
pub mod error;
/// Borrowed group views and typed reads.
pub mod group;
/// Parsed scheme storage and the file parser.
pub mod scheme_config;

pub use cache::DefaultConfigCache;
pub use error::{ConfigError, Result};
pub use group::ConfigGroup;
pub use scheme_config::SchemeConfig;
