//! keycalc CLI library
//!
//! Terminal front-end for the keycalc engine: argument parsing, config and
//! state files, log setup, and output rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod output;
pub mod repl;
mod session;

pub use commands::{Cli, Commands, EvalArgs, OutputFormat};
pub use config::{load_engine_config, parse_engine_config, CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{display_line, render_trace, render_warnings, EvalOutput, ERROR_DISPLAY};
pub use session::{load_snapshot, save_snapshot, Session};
