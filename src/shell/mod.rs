//! Process execution and the runner capability.

pub mod command;
pub mod runner;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use runner::{ProcessRunner, SystemRunner};
