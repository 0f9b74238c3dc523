//! Command-line interface for javacheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - Settings resolution, the check itself, and output rendering

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{
    execute, exit_code_for, render_human, render_json, run_check, CheckOutcome, Settings,
    EXIT_FAULT, EXIT_INSTALLED, EXIT_NOT_INSTALLED,
};
