use std::fmt::Write as _;

use chromaset::{
    BackgroundRole, ColorSetKind, DecorationRole, ForegroundRole, ResolvedColorSet, Rgba,
    ShadeRole, WidgetState,
};
use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::schemes::load_scheme;

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Built-in scheme name or path to a `.colors` file. Without it the
    /// default host palette is used.
    #[arg(long)]
    pub scheme: Option<String>,

    /// Color set: view, window, button, selection, tooltip, complementary, header.
    #[arg(long, value_parser = parse_kind)]
    pub set: ColorSetKind,

    /// Widget state: active, inactive, disabled.
    #[arg(long, value_parser = parse_state, default_value = "active")]
    pub state: WidgetState,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn parse_kind(raw: &str) -> std::result::Result<ColorSetKind, String> {
    ColorSetKind::from_name(raw).ok_or_else(|| {
        let names: Vec<_> = ColorSetKind::ALL.iter().map(|kind| kind.name()).collect();
        format!("unknown color set {raw:?}, expected one of: {}", names.join(", "))
    })
}

pub fn parse_state(raw: &str) -> std::result::Result<WidgetState, String> {
    WidgetState::from_name(raw)
        .ok_or_else(|| format!("unknown state {raw:?}, expected active, inactive, or disabled"))
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleColor {
    pub role: &'static str,
    pub color: Rgba,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub scheme: String,
    pub set: ColorSetKind,
    pub state: WidgetState,
    pub contrast: f64,
    pub foreground: Vec<RoleColor>,
    pub background: Vec<RoleColor>,
    pub decoration: Vec<RoleColor>,
    pub shade: Vec<RoleColor>,
}

impl ResolveReport {
    #[must_use]
    pub fn new(scheme: String, kind: ColorSetKind, state: WidgetState, set: &ResolvedColorSet) -> Self {
        Self {
            scheme,
            set: kind,
            state,
            contrast: set.contrast(),
            foreground: ForegroundRole::ALL
                .iter()
                .map(|role| RoleColor {
                    role: role.name(),
                    color: set.foreground(*role),
                })
                .collect(),
            background: BackgroundRole::ALL
                .iter()
                .map(|role| RoleColor {
                    role: role.name(),
                    color: set.background(*role),
                })
                .collect(),
            decoration: DecorationRole::ALL
                .iter()
                .map(|role| RoleColor {
                    role: role.name(),
                    color: set.decoration(*role),
                })
                .collect(),
            shade: ShadeRole::ALL
                .iter()
                .map(|role| RoleColor {
                    role: role.name(),
                    color: set.shade(*role),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} / {} ({}), contrast {:.2}",
            self.set.name(),
            self.state.name(),
            self.scheme,
            self.contrast
        );
        for (title, rows) in [
            ("foreground", &self.foreground),
            ("background", &self.background),
            ("decoration", &self.decoration),
            ("shade", &self.shade),
        ] {
            let _ = writeln!(out, "{title}:");
            for row in rows {
                let _ = writeln!(out, "  {:<10} {}", row.role, row.color.to_hex());
            }
        }
        out
    }
}

pub fn build_report(args: &ResolveArgs) -> Result<ResolveReport> {
    let config = args.scheme.as_deref().map(load_scheme).transpose()?;
    let set = ResolvedColorSet::resolve(args.set, args.state, config.as_ref());
    let scheme = match &config {
        Some(config) => config.name().to_string(),
        None => "system palette".to_string(),
    };
    Ok(ResolveReport::new(scheme, args.set, args.state, &set))
}

pub fn run_resolve(args: ResolveArgs) -> Result<()> {
    let report = build_report(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
