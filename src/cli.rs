use clap::Parser;
use std::path::PathBuf;

// Parsed once in `run` and handed to the coordinator.
#[derive(Parser, Debug, Clone)]
#[command(name = "rn-set-version", version, about)]
pub struct Options {
    /// New version, e.g. 1.2.3
    // Optional so a missing value is reported by the version parser.
    #[arg(value_name = "VERSION")]
    pub new_version: Option<String>,

    /// Print what happened to every file
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Project root that contains package.json, android/ and ios/
    #[arg(long, short = 'C', value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,
}
