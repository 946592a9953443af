use std::fmt;

/// Build and version identity of the running program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDetails {
    /// Package version, without a leading `v`.
    pub version: String,
    /// Full VCS commit hash.
    pub revision: Option<String>,
    /// Commit timestamp in RFC 3339 form.
    pub commit_time: Option<String>,
    /// Whether the working tree had uncommitted changes at build time.
    pub modified: bool,
    /// Compiler identification, e.g. `rustc 1.91.0 (f8297e351 2025-10-28)`.
    pub rustc: Option<String>,
}

impl VersionDetails {
    /// Creates details carrying only the package version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Sets the VCS commit hash.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Sets the commit timestamp.
    pub fn with_commit_time(mut self, commit_time: impl Into<String>) -> Self {
        self.commit_time = Some(commit_time.into());
        self
    }

    /// Marks whether the tree had uncommitted changes.
    pub fn with_modified(mut self, modified: bool) -> Self {
        self.modified = modified;
        self
    }

    /// Sets the compiler identification.
    pub fn with_rustc(mut self, rustc: impl Into<String>) -> Self {
        self.rustc = Some(rustc.into());
        self
    }
}

impl fmt::Display for VersionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version)?;
        if let Some(revision) = &self.revision {
            write!(f, " (commit {revision}")?;
            if self.modified {
                f.write_str(", modified")?;
            }
            f.write_str(")")?;
        }
        if let Some(commit_time) = &self.commit_time {
            write!(f, " committed {commit_time}")?;
        }
        if let Some(rustc) = &self.rustc {
            write!(f, " built with {rustc}")?;
        }
        Ok(())
    }
}
