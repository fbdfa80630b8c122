use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): keys were collected and printed (possibly an empty list)
/// - `Error` (2): the run failed (unreadable path, malformed YAML, bad config, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed and the key list was written to stdout.
    Success,
    /// Run aborted; nothing was written to stdout.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
