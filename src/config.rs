//! Configuration file loading.
//!
//! Settings are layered, later layers overriding earlier ones:
//! 1. Built-in defaults
//! 2. Config file (`--config`, `JAVACHECK_CONFIG`, or `.javacheck.yml` in
//!    the working directory)
//! 3. Environment variables and command-line flags (handled by clap)

use crate::error::{JavaCheckError, Result};
use crate::java::SchemePolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".javacheck.yml";

/// Minimum major version checked when nothing else says otherwise.
pub const DEFAULT_MINIMUM_MAJOR_VERSION: u32 = 8;

/// Contents of a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Java launcher to run instead of resolving one.
    #[serde(default)]
    pub java_path: Option<PathBuf>,

    /// Lowest acceptable effective major version.
    #[serde(default = "default_minimum")]
    pub minimum_major_version: u32,

    /// Let `9+` style versions satisfy the check.
    #[serde(default)]
    pub accept_modern_scheme: bool,

    /// Kill `java -version` if it takes longer than this.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_minimum() -> u32 {
    DEFAULT_MINIMUM_MAJOR_VERSION
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            java_path: None,
            minimum_major_version: DEFAULT_MINIMUM_MAJOR_VERSION,
            accept_modern_scheme: false,
            timeout_secs: None,
        }
    }
}

impl CheckConfig {
    /// Parse config from a YAML string.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| JavaCheckError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JavaCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content, path)
    }

    /// Load the explicit file if given, else `.javacheck.yml` in `dir` if
    /// present, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("Using config {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(JavaCheckError::ConfigValidationError {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        if let Some(path) = &self.java_path {
            if path.as_os_str().is_empty() {
                return Err(JavaCheckError::ConfigValidationError {
                    message: "java_path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Scheme policy implied by `accept_modern_scheme`.
    pub fn policy(&self) -> SchemePolicy {
        if self.accept_modern_scheme {
            SchemePolicy::AnyScheme
        } else {
            SchemePolicy::LegacyOnly
        }
    }

    /// Timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
