use std::fmt::Write as _;

use chromaset::{DEFAULT_CONTRAST, Rgba, ShadeRole, luma, shade};
use clap::Args;
use serde::Serialize;

use crate::error::{DoctorError, Result};

#[derive(Debug, Clone, Args)]
pub struct ShadesArgs {
    /// Base color, as `#rrggbb` or `r,g,b`.
    pub color: String,

    /// Scheme contrast, clamped into [-1, 1].
    #[arg(long, default_value_t = DEFAULT_CONTRAST, allow_negative_numbers = true)]
    pub contrast: f64,

    /// Chroma scale for the shifted colors (1.0 keeps chroma).
    #[arg(long, default_value_t = 1.0)]
    pub chroma: f64,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShadeRow {
    pub role: &'static str,
    pub color: Rgba,
    pub luma: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShadesReport {
    pub base: Rgba,
    pub base_luma: f64,
    pub contrast: f64,
    pub chroma: f64,
    pub shades: Vec<ShadeRow>,
}

pub fn build_report(args: &ShadesArgs) -> Result<ShadesReport> {
    if !args.chroma.is_finite() || args.chroma < 0.0 {
        return Err(DoctorError::invalid(format!(
            "--chroma must be a non-negative number, got {}",
            args.chroma
        )));
    }
    let base: Rgba = args.color.parse()?;
    let shades = ShadeRole::ALL
        .iter()
        .map(|role| {
            let color = shade(base, *role, args.contrast, args.chroma);
            ShadeRow {
                role: role.name(),
                color,
                luma: luma(color),
            }
        })
        .collect();
    Ok(ShadesReport {
        base,
        base_luma: luma(base),
        contrast: args.contrast,
        chroma: args.chroma,
        shades,
    })
}

impl ShadesReport {
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} (luma {:.3}), contrast {:.2}, chroma {:.2}",
            self.base.to_hex(),
            self.base_luma,
            self.contrast,
            self.chroma
        );
        for row in &self.shades {
            let _ = writeln!(out, "  {:<9} {}  luma {:.3}", row.role, row.color.to_hex(), row.luma);
        }
        out
    }
}

pub fn run_shades(args: ShadesArgs) -> Result<()> {
    let report = build_report(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
