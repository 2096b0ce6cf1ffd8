//! The fixed table of files and patterns a run rewrites.

use crate::error::Result;
use crate::version::Version;
use regex::Regex;
use std::path::{Path, PathBuf};

pub const GRADLE_FILE: &str = "android/app/build.gradle";

/// How many matches of a pattern are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceMode {
    All,
    First,
}

/// One pattern/replacement pair applied to one file.
#[derive(Debug, Clone)]
pub struct Location {
    pub target: PathBuf,
    pub pattern: Regex,
    pub replacement: String,
    pub mode: ReplaceMode,
}

impl Location {
    fn new(target: PathBuf, pattern: &str, replacement: String, mode: ReplaceMode) -> Result<Self> {
        Ok(Self {
            target,
            pattern: Regex::new(pattern)?,
            replacement,
            mode,
        })
    }
}

/// Path of the Xcode project file for `package_name`, relative to the project root.
pub fn pbxproj_path(package_name: &str) -> PathBuf {
    Path::new("ios")
        .join(format!("{}.xcodeproj", package_name))
        .join("project.pbxproj")
}

/// Builds the locations for `version`, in the order they are applied.
///
/// ```text
/// android/app/build.gradle              versionCode 123
/// android/app/build.gradle              versionName "1.2.3"
/// ios/<name>.xcodeproj/project.pbxproj  MARKETING_VERSION = 1.2.3
/// package.json                          "version": "1.2.3"   (first match only)
/// ```
pub fn build_locations(
    project_dir: &Path,
    version: &Version,
    package_name: &str,
) -> Result<Vec<Location>> {
    let gradle = project_dir.join(GRADLE_FILE);

    Ok(vec![
        Location::new(
            gradle.clone(),
            r"versionCode [0-9]+",
            format!("versionCode {}", version.stripped()),
            ReplaceMode::All,
        )?,
        Location::new(
            gradle,
            r#"versionName "[0-9, .]+""#,
            format!("versionName \"{}\"", version.raw()),
            ReplaceMode::All,
        )?,
        Location::new(
            project_dir.join(pbxproj_path(package_name)),
            r"MARKETING_VERSION = [0-9, .]+",
            format!("MARKETING_VERSION = {}", version.raw()),
            ReplaceMode::All,
        )?,
        Location::new(
            project_dir.join(crate::manifest::MANIFEST_FILE),
            r#""version": ".+""#,
            format!("\"version\": \"{}\"", version.raw()),
            ReplaceMode::First,
        )?,
    ])
}
