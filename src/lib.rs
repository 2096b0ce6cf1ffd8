//! Write one version string into the Android, iOS and `package.json` files
//! of a React Native project.
//!
//! ```text
//! rn-set-version 1.2.3 [-d] [-C <DIR>]
//! ```
//!
//! The version is substituted as text with fixed regular expressions; none
//! of the edited formats are parsed.

pub mod cli;
pub mod error;
pub mod location;
pub mod manifest;
pub mod run;
pub mod substitute;
pub mod version;

pub use error::*;

pub fn run() -> Result<run::RunSummary> {
    use clap::Parser;

    let options = cli::Options::parse();
    run::execute(&options)
}
