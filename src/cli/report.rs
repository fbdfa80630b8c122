//! Output formatting and printing utilities.
//!
//! The key list goes to stdout; progress and summaries go to stderr so the
//! list can be piped into other tools.

use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::OutputFormat;
use crate::core::{CollectObserver, Collection, KeyPaths};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Render the key list in the requested format, without a trailing newline.
pub fn format_keys(keys: &KeyPaths, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(keys).context("Failed to serialize keys."),
        OutputFormat::Lines => Ok(keys.iter().collect::<Vec<_>>().join("\n")),
    }
}

/// Write the key list to stdout in one write.
pub fn print_keys(keys: &KeyPaths, format: OutputFormat) -> Result<()> {
    print_keys_to(keys, format, &mut io::stdout().lock())
}

pub fn print_keys_to<W: Write>(
    keys: &KeyPaths,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    let mut output = format_keys(keys, format)?;
    if !output.is_empty() {
        output.push('\n');
    }
    writer
        .write_all(output.as_bytes())
        .context("Failed to write key list to stdout.")?;
    writer.flush().context("Failed to flush stdout.")
}

/// Print the verbose summary line to stderr.
pub fn print_summary(collection: &Collection) {
    print_summary_to(collection, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(collection: &Collection, writer: &mut W) {
    let keys = collection.keys.len();
    let files = collection.files.len();
    let msg = format!(
        "Collected {} {} from {} {}",
        keys,
        if keys == 1 { "key" } else { "keys" },
        files,
        if files == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print the config file in use, if any.
pub fn print_config_source(path: Option<&Path>) {
    if let Some(path) = path {
        eprintln!("{} {}", "config:".bold().cyan(), path.display());
    }
}

/// Prints one stderr line per merged file.
pub struct VerboseProgress<W: Write> {
    writer: W,
}

impl VerboseProgress<io::Stderr> {
    pub fn stderr() -> Self {
        Self {
            writer: io::stderr(),
        }
    }
}

impl<W: Write> VerboseProgress<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CollectObserver for VerboseProgress<W> {
    fn file_merged(&mut self, path: &Path, file_keys: usize) {
        let _ = writeln!(
            self.writer,
            "  {} {} ({} {})",
            "scanned".dimmed(),
            path.display(),
            file_keys,
            if file_keys == 1 { "key" } else { "keys" }
        );
    }
}
