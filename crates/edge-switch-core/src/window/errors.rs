use crate::errors::EdgeSwitchError;

use super::traits::PlatformErrorCode;

/// Why a targeted raise failed. All variants map to the same exit status;
/// the message tells them apart.
#[derive(Debug, thiserror::Error)]
pub enum RaiseError {
    #[error("Could not read the windows of process {pid} (AXError: {code})")]
    TargetUnavailable { pid: i32, code: PlatformErrorCode },

    #[error("No window with number {window_number} found for process {pid}")]
    TargetNotFound { pid: i32, window_number: u32 },

    #[error("Window {window_number} of process {pid} rejected the raise action (AXError: {code})")]
    ActionRejected {
        pid: i32,
        window_number: u32,
        code: PlatformErrorCode,
    },
}

impl EdgeSwitchError for RaiseError {
    fn error_code(&self) -> &'static str {
        match self {
            RaiseError::TargetUnavailable { .. } => "TARGET_UNAVAILABLE",
            RaiseError::TargetNotFound { .. } => "TARGET_NOT_FOUND",
            RaiseError::ActionRejected { .. } => "ACTION_REJECTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, RaiseError::TargetNotFound { .. })
    }
}
