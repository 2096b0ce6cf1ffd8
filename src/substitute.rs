//! Applies one location's pattern to its target file.
//!
//! Each call is an independent read-modify-write: no handle outlives the call.

use crate::error::{Result, VersionError};
use crate::location::{Location, ReplaceMode};
use regex::NoExpand;
use std::borrow::Cow;
use std::fs;
use std::io;

/// Outcome of applying one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubstitutionResult {
    pub file_found: bool,
    pub changed: bool,
}

/// Rewrites `location.target`, writing only when the content actually changes.
///
/// A missing target is reported as `file_found: false` rather than an error.
///
/// # Errors
///
/// `Io` if an existing file cannot be read or written.
pub fn apply(location: &Location) -> Result<SubstitutionResult> {
    let path = &location.target;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Target not found, skipping: {}", path.display());
            return Ok(SubstitutionResult::default());
        }
        Err(e) => return Err(VersionError::io(path, e)),
    };

    let replacement = NoExpand(location.replacement.as_str());
    let new_content = match location.mode {
        ReplaceMode::All => location.pattern.replace_all(&content, replacement),
        ReplaceMode::First => location.pattern.replace(&content, replacement),
    };

    let new_content = match new_content {
        Cow::Owned(s) if s != content => s,
        _ => {
            log::debug!("Content unchanged, skipping: {}", path.display());
            return Ok(SubstitutionResult {
                file_found: true,
                changed: false,
            });
        }
    };

    fs::write(path, new_content).map_err(|e| VersionError::io(path, e))?;
    log::debug!("Updated: {}", path.display());

    Ok(SubstitutionResult {
        file_found: true,
        changed: true,
    })
}
