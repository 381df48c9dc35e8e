//! glyphls CLI
//!
//! Parses flags, lists the directory, prints the rendered text.
//!
//! Exit codes:
//! - 0: listing printed, "No files found.", or version
//! - 1: I/O failure (unreadable directory, failed stat)
//! - 2: usage error (unknown flag, bad depth)

use anyhow::Result;
use clap::Parser;

use glyphls::config::{Args, Config};
use glyphls::{run, FsProvider, SystemOwners};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors print help and exit 2 inside clap
    let config = Config::from(Args::parse());

    let output = run(&config, &FsProvider::new(), &SystemOwners::new())?;
    print!("{output}");

    Ok(())
}
