//! Java runtime detection.
//!
//! # Modules
//!
//! - [`checker`] - The version check and its request/response types
//! - [`locate`] - Choosing which `java` executable to run
//! - [`version`] - Version token extraction and the effective-major rule

pub mod checker;
pub mod locate;
pub mod version;

pub use checker::{
    CheckRequest, CheckResponse, ErrorCode, JavaVersionChecker, SchemePolicy, VERSION_ARGS,
};
pub use locate::{locate_java, locate_java_with_env, JavaExecutable, JavaSource, DEFAULT_JAVA};
pub use version::{extract_version, InvalidVersionToken, ParsedVersion, VersionScheme};
