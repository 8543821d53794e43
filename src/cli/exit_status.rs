use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// checker tools.
///
/// - `Success` (0): Command completed, no hard errors (warnings allowed)
/// - `Failure` (1): Command completed but found hard errors
/// - `Error` (2): Command failed due to internal error (config error, unreadable snapshot, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, no hard errors recorded.
    Success,
    /// Command completed but recorded hard errors.
    Failure,
    /// Command failed due to internal error (config error, unreadable snapshot, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
