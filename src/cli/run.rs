//! Main entry point for the flatkeys CLI.
//!
//! Loads configuration, applies command-line overrides, and runs the
//! collector over the requested root.
//!
//! In verbose mode the config source is reported before any file is
//! scanned.
//!
//! # Returns
//! - `Ok(Collection)` with the collected keys and merged files
//! - `Err` if the config is invalid or any file cannot be read or parsed
use std::env;

use anyhow::{Context, Result};

use super::{
    args::Arguments,
    report::{self, VerboseProgress},
};
use crate::{
    config::load_config,
    core::{Collection, Collector},
};

pub fn run(args: &Arguments) -> Result<Collection> {
    let cwd = env::current_dir().context("Failed to determine current directory.")?;
    let loaded = load_config(&cwd)?;
    if args.verbose {
        report::print_config_source(loaded.path.as_deref());
    }

    let mut config = loaded.config;
    args.scan.apply_to(&mut config);
    config.validate()?;

    let collector = Collector::new(config.scan_options()?);
    let collection = if args.verbose {
        collector.run_with(&args.root, &mut VerboseProgress::stderr())?
    } else {
        collector.run(&args.root)?
    };

    Ok(collection)
}
