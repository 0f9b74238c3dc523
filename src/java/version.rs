//! Java version token extraction.
//!
//! Pulls the first `version "X.Y.Z"` token out of `java -version` output and
//! exposes the effective major version, honoring the legacy `1.X` scheme.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Body of a quoted version token: `MAJOR[.MINOR[.PATCH]][-suffix]`.
macro_rules! token_body {
    () => {
        r#"(\d+)(?:\.(\d+)(?:\.([^"\s]*))?)?([-+_][^"\s]*)?"#
    };
}

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(
    RE_VERSION_LINE,
    concat!(r#"(?i)\bversion\s+""#, token_body!(), r#"""#)
);
lazy_regex!(RE_BARE_TOKEN, concat!("^", token_body!(), "$"));

/// Which numbering scheme a Java version uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionScheme {
    /// `1.X.Y`, used through Java 8. The real major is `X`.
    Legacy,
    /// `X.Y.Z`, used from Java 9 on.
    Modern,
}

/// A Java version parsed from a `version "..."` token.
///
/// Equality compares the numeric components and patch only; `raw` is how
/// the token happened to be spelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedVersion {
    /// First numeric component.
    pub major: u32,
    /// Second numeric component (0 when the token has none).
    pub minor: u32,
    /// Everything after the second dot, verbatim (e.g. `0_291`).
    pub patch: String,
    /// The token as it appeared between the quotes.
    pub raw: String,
}

impl ParsedVersion {
    /// Build a version from its components.
    ///
    /// A patch starting with `-`, `+` or `_` is a suffix and is appended
    /// without a dot (`9-ea`, `17.1-ea`).
    pub fn new(major: u32, minor: u32, patch: impl Into<String>) -> Self {
        let patch = patch.into();
        let is_suffix = patch.starts_with(['-', '+', '_']);
        let raw = match (is_suffix, minor) {
            (true, 0) => format!("{}{}", major, patch),
            (true, _) => format!("{}.{}{}", major, minor, patch),
            (false, _) if patch.is_empty() => format!("{}.{}", major, minor),
            (false, _) => format!("{}.{}.{}", major, minor, patch),
        };
        Self {
            major,
            minor,
            patch,
            raw,
        }
    }

    /// Numbering scheme of this version.
    pub fn scheme(&self) -> VersionScheme {
        if self.major == 1 {
            VersionScheme::Legacy
        } else {
            VersionScheme::Modern
        }
    }

    /// The major version Java itself advertises (`1.8.0` is Java 8).
    pub fn effective_major(&self) -> u32 {
        match self.scheme() {
            VersionScheme::Legacy => self.minor,
            VersionScheme::Modern => self.major,
        }
    }

    fn from_captures(caps: &Captures<'_>, raw: &str) -> Option<Self> {
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let patch = caps
            .get(3)
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some(Self {
            major,
            minor,
            patch,
            raw: raw.to_string(),
        })
    }
}

impl PartialEq for ParsedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }
}

impl Eq for ParsedVersion {}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Error returned when a bare token is not a version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a Java version token: {0:?}")]
pub struct InvalidVersionToken(pub String);

impl FromStr for ParsedVersion {
    type Err = InvalidVersionToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        RE_BARE_TOKEN
            .captures(token)
            .and_then(|caps| Self::from_captures(&caps, token))
            .ok_or_else(|| InvalidVersionToken(s.to_string()))
    }
}

/// Find the first `version "..."` token in `output` and parse it.
///
/// Anything else in the output (JVM option banners, runtime lines) is
/// ignored. Returns `None` when no token is present or its numbers don't fit.
pub fn extract_version(output: &str) -> Option<ParsedVersion> {
    let caps = RE_VERSION_LINE.captures(output)?;
    let whole = caps.get(0)?.as_str();
    // Strip `version "` ... `"` to keep just the token.
    let raw = whole
        .rsplit_once('"')
        .and_then(|(head, _)| head.split_once('"'))
        .map(|(_, token)| token)?;
    ParsedVersion::from_captures(&caps, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_legacy_version_with_build_suffix() {
        let v = extract_version("java version \"1.8.0_291\"").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 8);
        assert_eq!(v.patch, "0_291");
        assert_eq!(v.raw, "1.8.0_291");
        assert_eq!(v.scheme(), VersionScheme::Legacy);
        assert_eq!(v.effective_major(), 8);
    }

    #[test]
    fn extracts_from_noisy_multiline_output() {
        let output = r#"
            Picked up JAVA_TOOL_OPTIONS: -Dlog4j2.formatMsgNoLookups=true
            openjdk version "1.8.0_322"
            OpenJDK Runtime Environment Corretto-8.322.06.1 (build 1.8.0_322-b06)
            OpenJDK 64-Bit Server VM Corretto-8.322.06.1 (build 25.322-b06, mixed mode)
        "#;
        let v = extract_version(output).unwrap();
        assert_eq!(v.raw, "1.8.0_322");
        assert_eq!(v.effective_major(), 8);
    }

    #[test]
    fn extracts_modern_version() {
        let v = extract_version("java version \"9.0.1\"").unwrap();
        assert_eq!(v.major, 9);
        assert_eq!(v.minor, 0);
        assert_eq!(v.patch, "1");
        assert_eq!(v.scheme(), VersionScheme::Modern);
        assert_eq!(v.effective_major(), 9);
    }

    #[test]
    fn extracts_major_only_token() {
        let v = extract_version("openjdk version \"17\" 2021-09-14\nOpenJDK Runtime").unwrap();
        assert_eq!(v.major, 17);
        assert_eq!(v.minor, 0);
        assert_eq!(v.patch, "");
        assert_eq!(v.raw, "17");
    }

    #[test]
    fn extracts_early_access_suffix() {
        let v = extract_version("java version \"9-ea\"").unwrap();
        assert_eq!(v.major, 9);
        assert_eq!(v.patch, "-ea");
        assert_eq!(v.raw, "9-ea");
    }

    #[test]
    fn patch_requires_a_minor_component() {
        assert!(extract_version("java version \"1.8u291\"").is_none());
        assert!("1.8u291".parse::<ParsedVersion>().is_err());
    }

    #[test]
    fn suffix_after_minor_is_kept() {
        let v = extract_version("openjdk version \"17.1-ea\"").unwrap();
        assert_eq!((v.major, v.minor), (17, 1));
        assert_eq!(v.patch, "-ea");
    }

    #[test]
    fn new_spells_suffix_like_the_token() {
        let extracted = extract_version("java version \"9-ea\"").unwrap();
        let built = ParsedVersion::new(9, 0, "-ea");
        assert_eq!(built.raw, "9-ea");
        assert_eq!(built, extracted);
        assert_eq!(ParsedVersion::new(17, 1, "-ea").raw, "17.1-ea");
    }

    #[test]
    fn equality_ignores_raw_spelling() {
        let extracted = extract_version("openjdk version \"17\"").unwrap();
        assert_eq!(extracted.raw, "17");
        assert_eq!(extracted, ParsedVersion::new(17, 0, ""));
    }

    #[test]
    fn match_is_case_insensitive() {
        let v = extract_version("JAVA VERSION \"11.0.2\"").unwrap();
        assert_eq!(v.effective_major(), 11);
    }

    #[test]
    fn no_version_keyword_is_none() {
        assert!(extract_version("java \"0.1\"").is_none());
    }

    #[test]
    fn unquoted_version_is_none() {
        assert!(extract_version("java version 1.8.0").is_none());
    }

    #[test]
    fn version_inside_longer_word_is_ignored() {
        assert!(extract_version("subversion \"1.14.1\"").is_none());
    }

    #[test]
    fn empty_output_is_none() {
        assert!(extract_version("").is_none());
    }

    #[test]
    fn command_not_found_text_is_none() {
        assert!(extract_version("sh: 1: java: not found").is_none());
    }

    #[test]
    fn overflowing_major_is_none() {
        assert!(extract_version("java version \"99999999999.0.0\"").is_none());
    }

    #[test]
    fn first_token_wins() {
        let output = "openjdk version \"11.0.2\"\njava version \"1.8.0_291\"";
        assert_eq!(extract_version(output).unwrap().major, 11);
    }

    #[test]
    fn recovers_embedded_major_and_minor() {
        for (major, minor) in [(1, 8), (9, 0), (11, 0), (21, 3), (1, 7)] {
            let output = format!("java version \"{}.{}.4_99\"", major, minor);
            let v = extract_version(&output).unwrap();
            assert_eq!((v.major, v.minor), (major, minor));
        }
    }

    #[test]
    fn from_str_parses_bare_token() {
        let v: ParsedVersion = "1.8.0_291".parse().unwrap();
        assert_eq!(v, ParsedVersion::new(1, 8, "0_291"));
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("openjdk".parse::<ParsedVersion>().is_err());
        assert!("".parse::<ParsedVersion>().is_err());
    }

    #[test]
    fn display_shows_raw_token() {
        assert_eq!(ParsedVersion::new(11, 0, "2").to_string(), "11.0.2");
        assert_eq!(ParsedVersion::new(17, 0, "").to_string(), "17.0");
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(ParsedVersion::new(1, 8, "0_291")).unwrap();
        assert_eq!(json["major"], 1);
        assert_eq!(json["minor"], 8);
        assert_eq!(json["patch"], "0_291");
    }
}
