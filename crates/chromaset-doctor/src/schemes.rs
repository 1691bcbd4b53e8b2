use std::path::Path;

use chromaset::SchemeConfig;

use crate::error::{DoctorError, Result};

const BREEZE_LIGHT: &str = include_str!("../schemes/breeze-light.colors");
const BREEZE_DARK: &str = include_str!("../schemes/breeze-dark.colors");

const BUILTIN_SCHEMES: [(&str, &str); 2] = [
    ("breeze-light", BREEZE_LIGHT),
    ("breeze-dark", BREEZE_DARK),
];

#[must_use]
pub fn list_scheme_names() -> Vec<String> {
    BUILTIN_SCHEMES
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect()
}

#[must_use]
pub fn builtin_scheme(name: &str) -> Option<&'static str> {
    BUILTIN_SCHEMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, content)| *content)
}

/// Load a scheme by built-in name or file path. Built-in names win.
pub fn load_scheme(spec: &str) -> Result<SchemeConfig> {
    if let Some(content) = builtin_scheme(spec) {
        tracing::debug!(scheme = spec, "using built-in scheme");
        return Ok(SchemeConfig::parse(content)?.with_name(spec));
    }

    let path = Path::new(spec);
    if !path.is_file() {
        return Err(DoctorError::SchemeNotFound {
            name: spec.to_string(),
        });
    }
    Ok(SchemeConfig::load(path)?)
}

pub fn print_schemes() {
    for name in list_scheme_names() {
        println!("{name}");
    }
}
