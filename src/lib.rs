//! javacheck - Detect an installed Java runtime and check its version.
//!
//! Runs `java -version`, pulls the version token out of whatever the JVM
//! printed, and reports whether the runtime meets a minimum major version.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading
//! - [`error`] - Error types and result aliases
//! - [`java`] - Version extraction and the version check
//! - [`shell`] - Process execution and the runner capability
//!
//! # Example
//!
//! ```
//! use javacheck::java::{CheckRequest, JavaVersionChecker};
//!
//! // Any `Fn(&str, &[&str]) -> Result<String>` can stand in for the process runner.
//! let runner = |_: &str, _: &[&str]| -> javacheck::Result<String> {
//!     Ok("openjdk version \"1.8.0_322\"".to_string())
//! };
//! let response = JavaVersionChecker::new(runner).check(&CheckRequest::new(8));
//! assert!(response.success);
//! assert!(response.is_installed);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod java;
pub mod shell;

pub use error::{JavaCheckError, Result};
