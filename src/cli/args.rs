//! CLI argument definitions using clap.
//!
//! flatkeys takes one positional argument, the directory to scan. The
//! optional flags override the values from `.flatkeysrc.json`.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for YAML files
    pub root: PathBuf,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format for the key list
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Discovery options (override config file).
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Only scan this many directory levels below the root (default: 3)
    #[arg(long, value_name = "N", conflicts_with = "recursive")]
    pub max_depth: Option<usize>,

    /// Scan every directory level below the root
    #[arg(long)]
    pub recursive: bool,

    /// File extension to scan, without the dot (repeatable, default: yml)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

impl ScanArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
            config.recursive = false;
        }
        if self.recursive {
            config.recursive = true;
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A single JSON array of strings
    #[default]
    Json,
    /// One key per line
    Lines,
}
