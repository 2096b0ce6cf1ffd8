//! Error types for rn-set-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, VersionError>`.
//! A missing target file is not an error: the substitution engine reports it
//! through `SubstitutionResult::file_found` and the run continues.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum VersionError {
    /// No version argument was given.
    #[error("Please provide a version number.")]
    MissingVersion,

    /// Version argument does not match the accepted format.
    #[error("Your version number should contain only digits and periods (got '{0}').")]
    InvalidVersion(String),

    /// `package.json` does not exist in the project directory.
    #[error("Could not read package.json: {} not found", .0.display())]
    ManifestNotFound(PathBuf),

    /// `package.json` exists but could not be read.
    #[error("Could not read package.json at {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `package.json` is not valid JSON, or `name`/`version` are not strings.
    #[error("Could not parse package.json at {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Reading or writing a target file failed.
    ///
    /// Files written earlier in the run stay written.
    #[error("Failed to update {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VersionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for rn-set-version operations.
pub type Result<T> = std::result::Result<T, VersionError>;
