//! Binary entry point for `rn-set-version`.

use colored::Colorize;
use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = rn_set_version::run() {
        eprintln!("{} {} {}", "Error:".red().bold(), e, "⚠".yellow());
        process::exit(1);
    }
}
