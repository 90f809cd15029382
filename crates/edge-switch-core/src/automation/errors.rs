use crate::errors::EdgeSwitchError;

#[derive(Debug, thiserror::Error)]
pub enum AutomationError {
    #[error("Failed to execute osascript: {message}")]
    SpawnFailed { message: String },

    #[error("Script did not finish within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Script failed: {stderr}")]
    ScriptFailed { stderr: String },

    #[error("Unexpected script output: {message}")]
    InvalidOutput { message: String },

    #[error("{app} is not running")]
    AppNotRunning { app: String },
}

impl EdgeSwitchError for AutomationError {
    fn error_code(&self) -> &'static str {
        match self {
            AutomationError::SpawnFailed { .. } => "AUTOMATION_SPAWN_FAILED",
            AutomationError::Timeout { .. } => "AUTOMATION_TIMEOUT",
            AutomationError::ScriptFailed { .. } => "AUTOMATION_SCRIPT_FAILED",
            AutomationError::InvalidOutput { .. } => "AUTOMATION_INVALID_OUTPUT",
            AutomationError::AppNotRunning { .. } => "AUTOMATION_APP_NOT_RUNNING",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, AutomationError::AppNotRunning { .. })
    }
}
