//! The process-invocation capability consumed by the version checker.
//!
//! [`ProcessRunner`] has a single operation: run a program and hand back
//! everything it printed. [`SystemRunner`] does this for real; tests pass a
//! closure returning canned text instead.

use super::command::{display_command, execute, CommandOptions};
use crate::error::Result;
use std::time::Duration;
use tracing::debug;

/// Runs a program and returns its captured output text.
pub trait ProcessRunner {
    /// Run `program` with `args` and return stdout and stderr merged.
    fn run_and_capture(&self, program: &str, args: &[&str]) -> Result<String>;
}

impl<F> ProcessRunner for F
where
    F: Fn(&str, &[&str]) -> Result<String>,
{
    fn run_and_capture(&self, program: &str, args: &[&str]) -> Result<String> {
        self(program, args)
    }
}

/// Spawns real processes via [`execute`].
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    options: CommandOptions,
}

impl SystemRunner {
    /// Create a runner with no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the child if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.options.timeout = timeout;
        self
    }
}

impl ProcessRunner for SystemRunner {
    fn run_and_capture(&self, program: &str, args: &[&str]) -> Result<String> {
        let result = execute(program, args, &self.options)?;
        debug!(
            "`{}` exited with {:?} in {:?}",
            display_command(program, args),
            result.exit_code,
            result.duration
        );
        Ok(result.combined_output())
    }
}
