//! The check command: resolve settings, run the check, report.

use crate::cli::args::Cli;
use crate::config::CheckConfig;
use crate::error::Result;
use crate::java::{
    locate_java, CheckRequest, CheckResponse, JavaExecutable, JavaSource, JavaVersionChecker,
    SchemePolicy,
};
use crate::shell::{ProcessRunner, SystemRunner};
use std::path::Path;
use std::time::Duration;

/// Exit code when Java meets the minimum.
pub const EXIT_INSTALLED: u8 = 0;
/// Exit code when Java is missing or too old.
pub const EXIT_NOT_INSTALLED: u8 = 1;
/// Exit code when the check could not run or the configuration is invalid.
pub const EXIT_FAULT: u8 = 2;

/// Effective settings after layering config file and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub java: JavaExecutable,
    pub minimum: u32,
    pub policy: SchemePolicy,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Layer CLI flags (and their env vars) over the config file.
    pub fn resolve(cli: &Cli, config: &CheckConfig) -> Self {
        let explicit = cli.java.as_deref().or(config.java_path.as_deref());
        let policy = if cli.any_scheme {
            SchemePolicy::AnyScheme
        } else {
            config.policy()
        };
        Self {
            java: locate_java(explicit),
            minimum: cli.min.unwrap_or(config.minimum_major_version),
            policy,
            timeout: cli.timeout.map(Duration::from_secs).or(config.timeout()),
        }
    }
}

/// Outcome of the command: the response and the process exit code.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub response: CheckResponse,
    pub exit_code: u8,
}

/// Map a response onto the process exit code.
pub fn exit_code_for(response: &CheckResponse) -> u8 {
    if !response.success {
        EXIT_FAULT
    } else if response.is_installed {
        EXIT_INSTALLED
    } else {
        EXIT_NOT_INSTALLED
    }
}

/// Run a check with the given runner and settings.
pub fn run_check<R: ProcessRunner>(runner: R, settings: &Settings) -> CheckOutcome {
    let checker = JavaVersionChecker::new(runner)
        .with_program(settings.java.program_str())
        .with_policy(settings.policy);
    let response = checker.check(&CheckRequest::new(settings.minimum));
    let exit_code = exit_code_for(&response);
    CheckOutcome {
        response,
        exit_code,
    }
}

/// Load config, run the check against the real system, and print the result.
pub fn execute(cli: &Cli, cwd: &Path) -> Result<u8> {
    let config = CheckConfig::discover(cli.config.as_deref(), cwd)?;
    let settings = Settings::resolve(cli, &config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let runner = SystemRunner::new().with_timeout(settings.timeout);
    let outcome = run_check(runner, &settings);

    if cli.json {
        println!("{}", render_json(&outcome.response)?);
    } else if !cli.quiet {
        println!("{}", render_human(&outcome.response, &settings));
    }

    Ok(outcome.exit_code)
}

/// Pretty JSON rendering of a response.
pub fn render_json(response: &CheckResponse) -> Result<String> {
    serde_json::to_string_pretty(response).map_err(|e| anyhow::Error::from(e).into())
}

/// One-line human rendering of a response.
pub fn render_human(response: &CheckResponse, settings: &Settings) -> String {
    if !response.success {
        return format!(
            "Could not check Java: {}",
            response.error_message.as_deref().unwrap_or("unknown error")
        );
    }

    let Some(version) = &response.version else {
        let hint = match settings.java.source {
            JavaSource::Path => " (is `java` on PATH?)",
            JavaSource::JavaHome | JavaSource::Explicit => "",
        };
        return format!(
            "No Java version found running {}{}",
            settings.java.program.display(),
            hint
        );
    };

    let major = version.effective_major();
    if response.is_installed {
        format!(
            "Java {} ({}) satisfies minimum {}",
            major, version, settings.minimum
        )
    } else if major >= settings.minimum {
        format!(
            "Java {} ({}) uses the 9+ version scheme; pass --any-scheme to accept it",
            major, version
        )
    } else {
        format!(
            "Java {} ({}) is older than required minimum {}",
            major, version, settings.minimum
        )
    }
}
