//! Version argument parsing.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{Result, VersionError};
use regex::Regex;
use std::fmt;

/// Digits, commas, periods and spaces, ending in a digit.
///
/// At least two characters long. A leading period is accepted.
const VERSION_PATTERN: &str = r"^[0-9, .]+[0-9]+$";

/// A validated version argument and its derived forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    raw: String,
    stripped: String,
}

impl Version {
    /// Validates the positional version argument.
    ///
    /// ## Errors
    /// - `MissingVersion` when no argument was given
    /// - `InvalidVersion` when it does not match `^[0-9, .]+[0-9]+$`
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw.ok_or(VersionError::MissingVersion)?;

        if !Regex::new(VERSION_PATTERN)?.is_match(raw) {
            return Err(VersionError::InvalidVersion(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            stripped: raw.replace('.', ""),
        })
    }

    /// The version exactly as given, e.g. `1.2.3`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The version with every `.` removed, e.g. `123`. Used as Android `versionCode`.
    pub fn stripped(&self) -> &str {
        &self.stripped
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
