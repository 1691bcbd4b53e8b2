use chromaset_color::Rgba;

use crate::scheme_config::SchemeConfig;

/// A borrowed view of one (possibly nested) group of a [`SchemeConfig`].
///
/// Views are cheap and always valid: a group that is absent from the file
/// simply has no entries, so every typed read returns its default.
#[derive(Debug, Clone)]
pub struct ConfigGroup<'a> {
    config: &'a SchemeConfig,
    path: Vec<String>,
}

impl<'a> ConfigGroup<'a> {
    pub(crate) fn new(config: &'a SchemeConfig, path: Vec<String>) -> Self {
        Self { config, path }
    }

    /// View a nested group, e.g. `[Colors:View][Inactive]`.
    #[must_use]
    pub fn group(&self, name: &str) -> ConfigGroup<'a> {
        let mut path = self.path.clone();
        path.push(name.to_string());
        ConfigGroup::new(self.config, path)
    }

    /// Group path from the top level down.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Whether this group or any group nested below it has entries.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.config.has_entries_under(&self.path)
    }

    /// Whether this group itself defines `key`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.read_str(key).is_some()
    }

    /// Raw string value of `key`, if present.
    #[must_use]
    pub fn read_str(&self, key: &str) -> Option<&'a str> {
        self.config.entry(&self.path, key)
    }

    /// Read a color written as `r,g,b`, `r,g,b,a`, or hex.
    #[must_use]
    pub fn read_color(&self, key: &str, default: Rgba) -> Rgba {
        self.read_parsed(key, default, |raw| raw.parse::<Rgba>().ok())
    }

    /// Read a boolean (`true/false`, `1/0`, `yes/no`, `on/off`).
    #[must_use]
    pub fn read_bool(&self, key: &str, default: bool) -> bool {
        self.read_parsed(key, default, |raw| {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            }
        })
    }

    /// Read a signed integer.
    #[must_use]
    pub fn read_i64(&self, key: &str, default: i64) -> i64 {
        self.read_parsed(key, default, |raw| raw.trim().parse::<i64>().ok())
    }

    /// Read a floating point number. Non-finite values count as malformed.
    #[must_use]
    pub fn read_f64(&self, key: &str, default: f64) -> f64 {
        self.read_parsed(key, default, |raw| {
            raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        })
    }

    fn read_parsed<T: Copy>(&self, key: &str, default: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
        let Some(raw) = self.read_str(key) else {
            return default;
        };
        match parse(raw) {
            Some(value) => value,
            None => {
                tracing::debug!(
                    group = %self.path.join("]["),
                    key,
                    value = raw,
                    "malformed scheme entry, using default"
                );
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn config() -> SchemeConfig {
        SchemeConfig::parse(
            "[G]\n\
             color=61,174,233\n\
             hex=#232629\n\
             rgba=1,2,3,4\n\
             bad_color=blue\n\
             yes=Yes\n\
             off=off\n\
             bool_junk=maybe\n\
             int=-3\n\
             int_junk=3.5\n\
             float=0.25\n\
             float_nan=NaN\n",
        )
        .unwrap()
    }

    #[test]
    fn reads_colors_in_both_notations() {
        let config = config();
        let g = config.group("G");
        assert_eq!(g.read_color("color", Rgba::BLACK), Rgba::rgb(61, 174, 233));
        assert_eq!(g.read_color("hex", Rgba::BLACK), Rgba::rgb(35, 38, 41));
        assert_eq!(g.read_color("rgba", Rgba::BLACK), Rgba::rgba(1, 2, 3, 4));
        assert_eq!(g.read_color("missing", Rgba::WHITE), Rgba::WHITE);
    }

    #[test]
    fn reads_bools_leniently() {
        let config = config();
        let g = config.group("G");
        assert!(g.read_bool("yes", false));
        assert!(!g.read_bool("off", true));
        assert!(g.read_bool("missing", true));
    }

    #[test]
    fn reads_numbers() {
        let config = config();
        let g = config.group("G");
        assert_eq!(g.read_i64("int", 0), -3);
        assert_eq!(g.read_f64("float", 0.0), 0.25);
        assert_eq!(g.read_f64("int", 0.0), -3.0);
    }

    #[traced_test]
    #[test]
    fn malformed_values_fall_back_and_log() {
        let config = config();
        let g = config.group("G");
        assert_eq!(g.read_color("bad_color", Rgba::WHITE), Rgba::WHITE);
        assert!(g.read_bool("bool_junk", true));
        assert_eq!(g.read_i64("int_junk", 7), 7);
        assert_eq!(g.read_f64("float_nan", 0.5), 0.5);
        assert!(logs_contain("malformed scheme entry"));
    }

    #[test]
    fn missing_group_reads_defaults() {
        let config = config();
        let g = config.group("Nope").group("Deeper");
        assert!(!g.exists());
        assert_eq!(g.path(), ["Nope".to_string(), "Deeper".to_string()]);
        assert_eq!(g.read_i64("int", 11), 11);
        assert!(!g.has_key("int"));
    }
}
