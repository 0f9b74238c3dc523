//! Installed Java version check.
//!
//! The `JavaVersionChecker` runs `java -version` through a [`ProcessRunner`],
//! extracts the version token and compares it against a required minimum.
//! Every outcome, including a failure to run the command, comes back as a
//! [`CheckResponse`] value.

use crate::error::JavaCheckError;
use crate::java::version::{extract_version, ParsedVersion, VersionScheme};
use crate::shell::{display_command, ProcessRunner};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Arguments passed to the java launcher to print its version banner.
pub const VERSION_ARGS: &[&str] = &["-version"];

/// What to check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Lowest acceptable effective major version (8 for Java 8).
    pub required_minimum_major_version: u32,
}

impl CheckRequest {
    /// Create a request for the given minimum major version.
    pub fn new(required_minimum_major_version: u32) -> Self {
        Self {
            required_minimum_major_version,
        }
    }
}

/// Which version numbering schemes may satisfy a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemePolicy {
    /// Only `1.X.*` versions count as installed.
    #[default]
    LegacyOnly,
    /// Any parsed version counts when its effective major is high enough.
    AnyScheme,
}

impl SchemePolicy {
    /// Whether `version` meets `minimum` under this policy.
    pub fn satisfies(self, version: &ParsedVersion, minimum: u32) -> bool {
        match self {
            SchemePolicy::LegacyOnly => {
                version.scheme() == VersionScheme::Legacy && version.effective_major() >= minimum
            }
            SchemePolicy::AnyScheme => version.effective_major() >= minimum,
        }
    }
}

/// Machine-readable reason a check could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The java process could not be started or read.
    ProcessFailed,
    /// The java process was killed after exceeding its timeout.
    Timeout,
    /// Anything else.
    Unknown,
}

impl From<&JavaCheckError> for ErrorCode {
    fn from(err: &JavaCheckError) -> Self {
        match err {
            JavaCheckError::CommandFailed { .. } | JavaCheckError::Io(_) => {
                ErrorCode::ProcessFailed
            }
            JavaCheckError::Timeout { .. } => ErrorCode::Timeout,
            _ => ErrorCode::Unknown,
        }
    }
}

/// Outcome of a check.
///
/// `success` says whether the check itself ran; `is_installed` says whether
/// the detected Java meets the request. A successful check can still report
/// that Java is missing or too old.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// The command ran and its output was read.
    pub success: bool,
    /// A version was found and it satisfies the request.
    pub is_installed: bool,
    /// The version found, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ParsedVersion>,
    /// Set when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    /// Human-readable fault description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CheckResponse {
    /// Successful check that found a version (satisfying or not).
    pub fn detected(version: ParsedVersion, is_installed: bool) -> Self {
        Self {
            success: true,
            is_installed,
            version: Some(version),
            error_code: None,
            error_message: None,
        }
    }

    /// Successful check whose output held no version token.
    pub fn not_found() -> Self {
        Self {
            success: true,
            is_installed: false,
            version: None,
            error_code: None,
            error_message: None,
        }
    }

    /// Check that could not run.
    pub fn fault(err: &JavaCheckError) -> Self {
        Self {
            success: false,
            is_installed: false,
            version: None,
            error_code: Some(ErrorCode::from(err)),
            error_message: Some(err.to_string()),
        }
    }
}

/// Checks the installed Java against a minimum major version.
///
/// Holds no state between calls; the same checker can be reused or shared.
#[derive(Debug, Clone)]
pub struct JavaVersionChecker<R> {
    runner: R,
    program: String,
    policy: SchemePolicy,
}

impl<R: ProcessRunner> JavaVersionChecker<R> {
    /// Create a checker that runs plain `java` with the default policy.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            program: crate::java::locate::DEFAULT_JAVA.to_string(),
            policy: SchemePolicy::default(),
        }
    }

    /// Run this program instead of `java`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Use the given scheme policy.
    pub fn with_policy(mut self, policy: SchemePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Program that will be run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Scheme policy in effect.
    pub fn policy(&self) -> SchemePolicy {
        self.policy
    }

    /// Run the check.
    pub fn check(&self, request: &CheckRequest) -> CheckResponse {
        let command = display_command(&self.program, VERSION_ARGS);
        debug!("Checking Java version with `{}`", command);

        let output = match self.runner.run_and_capture(&self.program, VERSION_ARGS) {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not run `{}`: {}", command, e);
                return CheckResponse::fault(&e);
            }
        };

        self.evaluate(&output, request)
    }

    /// Decide the response from already-captured output.
    pub fn evaluate(&self, output: &str, request: &CheckRequest) -> CheckResponse {
        let Some(version) = extract_version(output) else {
            debug!("No version token in output; treating Java as not installed");
            return CheckResponse::not_found();
        };

        let minimum = request.required_minimum_major_version;
        let is_installed = self.policy.satisfies(&version, minimum);
        debug!(
            "Found Java {} (effective major {}, {:?} scheme); minimum {} -> installed={}",
            version,
            version.effective_major(),
            version.scheme(),
            minimum,
            is_installed
        );

        CheckResponse::detected(version, is_installed)
    }
}
