//! Defines the error type returned by version lookups.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned when version details cannot be produced.
pub enum VersionError {
    #[error("no version information found")]
    NoVcsInfo,

    #[error("package version is empty")]
    EmptyVersion,

    #[error("{0}")]
    Lookup(String),
}
