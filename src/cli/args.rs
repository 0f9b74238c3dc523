//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// javacheck - Check the installed Java against a minimum version.
#[derive(Debug, Parser)]
#[command(name = "javacheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimum Java major version required (e.g. 8, 11, 17)
    #[arg(short, long = "min", env = "JAVACHECK_MIN_VERSION")]
    pub min: Option<u32>,

    /// Java executable to run (defaults to $JAVA_HOME/bin/java, then `java` on PATH)
    #[arg(long, env = "JAVACHECK_JAVA")]
    pub java: Option<PathBuf>,

    /// Let 9+ style version strings satisfy the check
    #[arg(long)]
    pub any_scheme: bool,

    /// Kill `java -version` after this many seconds
    #[arg(long, env = "JAVACHECK_TIMEOUT", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to config file (defaults to ./.javacheck.yml if present)
    #[arg(short, long, env = "JAVACHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print nothing; report through the exit code only
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::parse_from(["javacheck"]);
        assert!(cli.java.is_none());
        assert!(!cli.any_scheme);
        assert!(!cli.json);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "javacheck",
            "--min",
            "11",
            "--java",
            "/opt/jdk/bin/java",
            "--any-scheme",
            "--timeout",
            "5",
            "--config",
            "check.yml",
            "--json",
            "--debug",
        ]);
        assert_eq!(cli.min, Some(11));
        assert_eq!(cli.java, Some(PathBuf::from("/opt/jdk/bin/java")));
        assert!(cli.any_scheme);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.config, Some(PathBuf::from("check.yml")));
        assert!(cli.json);
        assert!(cli.debug);
    }

    #[test]
    fn short_min_flag() {
        let cli = Cli::parse_from(["javacheck", "-m", "17"]);
        assert_eq!(cli.min, Some(17));
    }

    #[test]
    fn rejects_negative_min() {
        assert!(Cli::try_parse_from(["javacheck", "--min", "-1"]).is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(Cli::try_parse_from(["javacheck", "--timeout", "0"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_json() {
        assert!(Cli::try_parse_from(["javacheck", "--quiet", "--json"]).is_err());
    }
}
