//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, OutputFormat, ScanArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let collection = run::run(&args)?;

    report::print_keys(&collection.keys, args.format)?;
    if args.verbose {
        report::print_summary(&collection);
    }

    Ok(ExitStatus::Success)
}
