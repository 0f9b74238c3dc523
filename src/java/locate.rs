//! Choosing which `java` executable to run.
//!
//! Lookup order:
//! 1. An explicit path (CLI flag or config file)
//! 2. `$JAVA_HOME/bin/java`, when that file exists
//! 3. Plain `java`, left to the OS to find on `PATH`

use std::path::{Path, PathBuf};

/// Bare program name used when nothing more specific is known.
pub const DEFAULT_JAVA: &str = "java";

/// Where the chosen executable came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaSource {
    /// Passed in explicitly.
    Explicit,
    /// Derived from `JAVA_HOME`.
    JavaHome,
    /// Bare `java`, resolved through `PATH` at spawn time.
    Path,
}

/// A resolved java executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaExecutable {
    /// Program to spawn.
    pub program: PathBuf,
    /// How it was chosen.
    pub source: JavaSource,
}

impl JavaExecutable {
    /// Program as a string for process spawning.
    pub fn program_str(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// File name of the java launcher on this platform.
fn launcher_name() -> &'static str {
    if cfg!(windows) {
        "java.exe"
    } else {
        "java"
    }
}

/// Resolve the java executable using real environment variables.
pub fn locate_java(explicit: Option<&Path>) -> JavaExecutable {
    locate_java_with_env(explicit, |key: &str| std::env::var(key))
}

/// Resolve the java executable with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn locate_java_with_env<F>(explicit: Option<&Path>, env_fn: F) -> JavaExecutable
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Some(path) = explicit {
        return JavaExecutable {
            program: path.to_path_buf(),
            source: JavaSource::Explicit,
        };
    }

    if let Ok(home) = env_fn("JAVA_HOME") {
        if !home.trim().is_empty() {
            let candidate = Path::new(home.trim()).join("bin").join(launcher_name());
            if candidate.is_file() {
                return JavaExecutable {
                    program: candidate,
                    source: JavaSource::JavaHome,
                };
            }
            tracing::debug!(
                "JAVA_HOME is set but {} does not exist; falling back to PATH",
                candidate.display()
            );
        }
    }

    JavaExecutable {
        program: PathBuf::from(DEFAULT_JAVA),
        source: JavaSource::Path,
    }
}
