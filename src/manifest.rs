//! Package manifest (`package.json`) loading.
//!
//! Only the fields the run needs are deserialized; everything else in the
//! file is ignored. The manifest is rewritten later through plain text
//! substitution, never through this struct.

use crate::error::{Result, VersionError};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Stands in for a missing `name` in paths and messages.
pub const UNNAMED_PACKAGE: &str = "undefined";

/// The `name` and `version` of the project, as found before any edits.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Reads `package.json` from `project_dir`.
    ///
    /// # Errors
    ///
    /// - `ManifestNotFound`: no `package.json` in `project_dir`
    /// - `ManifestRead`: the file exists but cannot be read
    /// - `ManifestParse`: not valid JSON, or `name`/`version` are not strings
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);

        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                VersionError::ManifestNotFound(path.clone())
            } else {
                VersionError::ManifestRead {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let manifest: Self = serde_json::from_str(&content)
            .map_err(|source| VersionError::ManifestParse { path, source })?;

        log::debug!(
            "Loaded {} (name: {:?}, version: {:?})",
            MANIFEST_FILE,
            manifest.name,
            manifest.version
        );

        if manifest.name.is_none() {
            log::warn!("{} has no name, using '{}'", MANIFEST_FILE, UNNAMED_PACKAGE);
        }

        Ok(manifest)
    }

    /// The package name, or `undefined` when the manifest has none.
    pub fn package_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_PACKAGE)
    }
}
