use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::error::{ConfigError, Result};
use crate::group::ConfigGroup;

type Entries = AHashMap<String, String>;

/// A parsed scheme file.
///
/// Groups are addressed by their path: `[Colors:View]` is `["Colors:View"]`
/// and `[Colors:View][Inactive]` is `["Colors:View", "Inactive"]`. Entries
/// that appear before any header live in the root group (empty path).
///
/// `SchemeConfig` is immutable once built and is `Send + Sync`, so one parsed
/// scheme can back resolutions on any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeConfig {
    name: String,
    groups: AHashMap<Vec<String>, Entries>,
}

impl SchemeConfig {
    /// A configuration with no groups. Every read returns its default.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse scheme text. The resulting config has an empty [`name`](Self::name).
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::empty();
        let mut current: Vec<String> = Vec::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                current = parse_header(line, line_no)?;
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::syntax(
                    line_no,
                    format!("expected `key=value` or `[Group]`, found {line:?}"),
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::syntax(line_no, "entry has an empty key"));
            }
            config
                .groups
                .entry(current.clone())
                .or_default()
                .insert(key.to_string(), value.trim().to_string());
        }

        Ok(config)
    }

    /// Read and parse a scheme file. The config's [`name`](Self::name) is the
    /// path as given.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;
        config.name = path.to_string_lossy().into_owned();
        tracing::debug!(
            path = %path.display(),
            groups = config.groups.len(),
            "loaded scheme file"
        );
        Ok(config)
    }

    /// Identity of this configuration: the source path, or `""` when built in
    /// memory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a copy of this config carrying a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set an entry, creating its group if needed.
    pub fn insert(&mut self, group_path: &[&str], key: &str, value: impl Into<String>) {
        let path = group_path.iter().map(|s| (*s).to_string()).collect();
        self.groups
            .entry(path)
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_entry(mut self, group_path: &[&str], key: &str, value: impl Into<String>) -> Self {
        self.insert(group_path, key, value);
        self
    }

    /// View a top-level group. Missing groups read as empty.
    #[must_use]
    pub fn group(&self, name: &str) -> ConfigGroup<'_> {
        ConfigGroup::new(self, vec![name.to_string()])
    }

    /// Whether a top-level group (or any of its nested groups) has entries.
    #[must_use]
    pub fn has_group(&self, name: &str) -> bool {
        self.group(name).exists()
    }

    /// Names of all top-level groups that have entries, sorted.
    #[must_use]
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .filter_map(|(path, _)| path.first().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub(crate) fn entry(&self, path: &[String], key: &str) -> Option<&str> {
        self.groups
            .get(path)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub(crate) fn has_entries_under(&self, prefix: &[String]) -> bool {
        self.groups
            .iter()
            .any(|(path, entries)| !entries.is_empty() && path.starts_with(prefix))
    }
}

fn parse_header(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut path = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let Some(after_open) = rest.strip_prefix('[') else {
            return Err(ConfigError::syntax(
                line_no,
                format!("unexpected text after group header: {rest:?}"),
            ));
        };
        let Some(close) = after_open.find(']') else {
            return Err(ConfigError::syntax(line_no, "unterminated group header"));
        };
        let name = after_open[..close].trim();
        // `[$i]`-style markers are flags, not group names.
        if !name.starts_with('$') {
            if name.is_empty() {
                return Err(ConfigError::syntax(line_no, "empty group name"));
            }
            path.push(name.to_string());
        }
        rest = after_open[close + 1..].trim_start();
    }
    Ok(path)
}
