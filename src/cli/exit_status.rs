use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed, report written
/// - `Error` (1): command failed (config missing, output not writable, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
