#![forbid(unsafe_code)]

//! Command line diagnostics for chromaset color schemes.

pub mod check;
pub mod cli;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod schemes;
pub mod shades;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{DoctorError, Result};
