//! Orchestration of a version update run.
//!
//! Loads the manifest, validates the version, then applies every location in
//! order. Nothing is rolled back: if a write fails, files updated earlier in
//! the run keep the new version.

use crate::cli::Options;
use crate::error::{Result, VersionError};
use crate::location::build_locations;
use crate::manifest::PackageManifest;
use crate::substitute::apply;
use crate::version::Version;
use colored::Colorize;
use std::fmt;

/// How a run ended, judged by how many locations changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every location was rewritten.
    Updated,
    /// Nothing changed and `package.json` already had the new version.
    AlreadyCurrent,
    /// Nothing changed.
    Unchanged,
    /// Some locations changed, others did not.
    Partial,
}

impl Outcome {
    /// Classifies a finished run.
    ///
    /// `current` is the manifest version read before any edits.
    pub fn classify(changes: usize, total: usize, current: Option<&str>, new: &str) -> Self {
        if changes == total {
            Outcome::Updated
        } else if changes == 0 {
            if current == Some(new) {
                Outcome::AlreadyCurrent
            } else {
                Outcome::Unchanged
            }
        } else {
            Outcome::Partial
        }
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub package_name: String,
    pub old_version: Option<String>,
    pub new_version: String,
    pub changes: usize,
    pub total: usize,
    pub outcome: Outcome,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = "✓".green();
        let warning = "⚠".yellow();

        match self.outcome {
            Outcome::Updated => write!(
                f,
                "{}: {}: ==> {} {}",
                self.package_name,
                self.old_version.as_deref().unwrap_or("unknown"),
                self.new_version,
                check
            ),
            Outcome::AlreadyCurrent => {
                write!(f, "Version is already {} {}", self.new_version, warning)
            }
            Outcome::Unchanged => write!(
                f,
                "No files changed. Run with -d flag for debug log. {}",
                warning
            ),
            Outcome::Partial => write!(
                f,
                "One or more files were not changed. Run with -d flag for debug log. {}",
                warning
            ),
        }
    }
}

/// Runs the update described by `options` and prints the summary line.
pub fn execute(options: &Options) -> Result<RunSummary> {
    let project_dir = &options.project_dir;
    if !project_dir.is_dir() {
        return Err(VersionError::Other(anyhow::anyhow!(
            "Project directory does not exist: {}",
            project_dir.display()
        )));
    }

    let manifest = PackageManifest::load(project_dir)?;
    let version = Version::parse(options.new_version.as_deref())?;

    let locations = build_locations(project_dir, &version, manifest.package_name())?;
    log::debug!(
        "Updating {} locations in {} to {}",
        locations.len(),
        project_dir.display(),
        version
    );

    let mut changes = 0;
    for location in &locations {
        let display = location.target.display();
        let result = apply(location)?;

        if !result.file_found {
            println!("Could not find file: {} {}", display, "⚠".yellow());
        }

        if result.changed {
            changes += 1;
            if options.debug {
                println!("Set {} to:  {}", display, location.replacement);
            }
        } else if options.debug {
            println!("{} was not changed.", display);
        }
    }

    let total = locations.len();
    let outcome = Outcome::classify(
        changes,
        total,
        manifest.version.as_deref(),
        version.raw(),
    );

    let summary = RunSummary {
        package_name: manifest.package_name().to_string(),
        old_version: manifest.version,
        new_version: version.raw().to_string(),
        changes,
        total,
        outcome,
    };

    if summary.outcome == Outcome::Partial {
        log::debug!("{} of {} locations changed", summary.changes, summary.total);
    }
    println!("{}", summary);

    Ok(summary)
}
