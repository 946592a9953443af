//! Version details providers.
//!
//! [`VersionProvider`] is the seam between the reporter and wherever version
//! information comes from. [`BuildInfo`] is the production implementation,
//! backed by the stamps `build.rs` records while compiling this crate.

use crate::details::VersionDetails;
use crate::error::VersionError;

/// Something that can produce version details or fail with a reason.
pub trait VersionProvider {
    fn details(&self) -> Result<VersionDetails, VersionError>;
}

impl<F> VersionProvider for F
where
    F: Fn() -> Result<VersionDetails, VersionError>,
{
    fn details(&self) -> Result<VersionDetails, VersionError> {
        self()
    }
}

/// Version metadata captured at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    revision: Option<String>,
    commit_time: Option<String>,
    modified: bool,
    rustc: Option<String>,
}

impl BuildInfo {
    /// Creates build info for `version` from explicit VCS metadata.
    pub fn new(
        version: impl Into<String>,
        revision: Option<String>,
        commit_time: Option<String>,
        modified: bool,
    ) -> Self {
        Self {
            version: version.into(),
            revision,
            commit_time,
            modified,
            rustc: None,
        }
    }

    /// Reads the stamps recorded by the build script for the package `version`.
    ///
    /// The version is passed in by the caller so that an executable reports
    /// its own `CARGO_PKG_VERSION` rather than this library's.
    pub fn from_build(version: &str) -> Self {
        Self {
            version: version.to_string(),
            revision: stamp(option_env!("TEMPLATE_GO_VCS_REVISION")),
            commit_time: stamp(option_env!("TEMPLATE_GO_VCS_TIME")),
            modified: stamp_flag(option_env!("TEMPLATE_GO_VCS_MODIFIED")),
            rustc: stamp(option_env!("TEMPLATE_GO_RUSTC_VERSION")),
        }
    }

    /// Records the compiler identification reported alongside the details.
    pub fn with_rustc(mut self, rustc: impl Into<String>) -> Self {
        self.rustc = Some(rustc.into());
        self
    }
}

/// A flag stamp is set only when the build script wrote `true`.
fn stamp_flag(value: Option<&str>) -> bool {
    stamp(value).is_some_and(|value| value == "true")
}

fn stamp(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl VersionProvider for BuildInfo {
    fn details(&self) -> Result<VersionDetails, VersionError> {
        let version = self.version.trim();
        if version.is_empty() {
            return Err(VersionError::EmptyVersion);
        }
        let revision = self.revision.as_ref().ok_or(VersionError::NoVcsInfo)?;

        let mut details = VersionDetails::new(version)
            .with_revision(revision.as_str())
            .with_modified(self.modified);
        if let Some(commit_time) = &self.commit_time {
            details = details.with_commit_time(commit_time.as_str());
        }
        if let Some(rustc) = &self.rustc {
            details = details.with_rustc(rustc.as_str());
        }
        Ok(details)
    }
}
