use std::fmt::Write as _;

use chromaset::{ColorSetKind, contrast_f, is_color_set_supported};
use clap::Args;
use serde::Serialize;

use crate::error::{DoctorError, Result};
use crate::schemes::load_scheme;

/// Exit code when a scheme defines none of the color sets.
pub const NO_COLOR_SETS_EXIT: i32 = 3;

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Built-in scheme name or path to a `.colors` file.
    #[arg(long)]
    pub scheme: String,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetSupport {
    pub set: ColorSetKind,
    pub group: &'static str,
    pub supported: bool,
    pub inactive_palette: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub scheme: String,
    pub contrast: f64,
    pub groups: Vec<String>,
    pub sets: Vec<SetSupport>,
}

impl CheckReport {
    #[must_use]
    pub fn supported_count(&self) -> usize {
        self.sets.iter().filter(|set| set.supported).count()
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: contrast {:.2}", self.scheme, self.contrast);
        for set in &self.sets {
            let mark = if set.supported { "ok" } else { "--" };
            let inactive = if set.inactive_palette { " [inactive palette]" } else { "" };
            let _ = writeln!(out, "  {mark} {:<14}{inactive}", set.set.name());
        }
        let _ = writeln!(
            out,
            "{}/{} color sets defined",
            self.supported_count(),
            self.sets.len()
        );
        out
    }
}

pub fn build_report(args: &CheckArgs) -> Result<CheckReport> {
    let config = load_scheme(&args.scheme)?;
    let sets = ColorSetKind::ALL
        .into_iter()
        .map(|kind| SetSupport {
            set: kind,
            group: kind.config_group(),
            supported: is_color_set_supported(&config, kind),
            inactive_palette: config.group(kind.config_group()).group("Inactive").exists(),
        })
        .collect();
    Ok(CheckReport {
        scheme: config.name().to_string(),
        contrast: contrast_f(Some(&config)),
        groups: config.group_names(),
        sets,
    })
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let report = build_report(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    if report.supported_count() == 0 {
        return Err(DoctorError::exit(
            NO_COLOR_SETS_EXIT,
            format!("{} defines no color sets", report.scheme),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(scheme: &str) -> CheckArgs {
        CheckArgs {
            scheme: scheme.to_string(),
            json: false,
        }
    }

    #[test]
    fn builtin_scheme_is_complete() {
        let report = build_report(&args("breeze-light")).unwrap();
        assert_eq!(report.supported_count(), ColorSetKind::ALL.len());
        let header = report
            .sets
            .iter()
            .find(|set| set.set == ColorSetKind::Header)
            .unwrap();
        assert!(header.inactive_palette);
        assert!(report.groups.contains(&"KDE".to_string()));
        assert!(report.render_text().ends_with("7/7 color sets defined\n"));
    }

    #[test]
    fn partial_scheme_reports_gaps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[Colors:Window]\nBackgroundNormal=1,2,3\n").unwrap();
        let report = build_report(&args(&file.path().to_string_lossy())).unwrap();
        assert_eq!(report.supported_count(), 1);
        assert!((report.contrast - 0.7).abs() < 1e-12);
    }

    #[test]
    fn scheme_without_sets_fails_with_dedicated_code() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[General]\nName=Empty\n").unwrap();
        let err = run_check(args(&file.path().to_string_lossy())).unwrap_err();
        assert_eq!(err.exit_code(), NO_COLOR_SETS_EXIT);
    }
}
