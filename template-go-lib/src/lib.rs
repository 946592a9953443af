//! `template-go-lib` looks up the version details of the running build and
//! prints them the way the `template-go` CLI does.
//!
//! # Example
//!
//! ```rust
//! use template_go_lib::details::VersionDetails;
//! use template_go_lib::error::VersionError;
//! use template_go_lib::report::{report, Reported};
//!
//! let provider = || -> Result<VersionDetails, VersionError> {
//!     Ok(VersionDetails::new("1.2.3").with_revision("abcdef"))
//! };
//!
//! let mut out = Vec::new();
//! let reported = report(&provider, &mut out, std::io::sink()).unwrap();
//!
//! assert_eq!(reported, Reported::Details);
//! assert!(String::from_utf8(out).unwrap().starts_with("v1.2.3 (commit abcdef)\n\n"));
//! ```

pub mod details;
pub mod error;
pub mod provider;
pub mod report;
#[cfg(test)]
mod stamps;

pub use crate::details::VersionDetails;
pub use crate::error::VersionError;
pub use crate::provider::{BuildInfo, VersionProvider};
pub use crate::report::{report, Reported};
