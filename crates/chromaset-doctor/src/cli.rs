use clap::{Parser, Subcommand};

use crate::check::{CheckArgs, run_check};
use crate::error::Result;
use crate::logging;
use crate::resolve::{ResolveArgs, run_resolve};
use crate::schemes::print_schemes;
use crate::shades::{ShadesArgs, run_shades};

#[derive(Debug, Parser)]
#[command(
    name = "chromaset-doctor",
    about = "Inspect chromaset color schemes: resolve color sets, print shades, check coverage",
    version
)]
pub struct Cli {
    /// Log resolution decisions at debug level (overrides CHROMASET_LOG).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one color set in one state and print every role.
    Resolve(ResolveArgs),

    /// Print the five bevel shades of a color.
    Shades(ShadesArgs),

    /// Report which color sets a scheme defines.
    Check(CheckArgs),

    /// Print built-in scheme names.
    #[command(name = "list-schemes")]
    ListSchemes,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Shades(args) => run_shades(args),
        Commands::Check(args) => run_check(args),
        Commands::ListSchemes => {
            print_schemes();
            Ok(())
        }
    }
}
