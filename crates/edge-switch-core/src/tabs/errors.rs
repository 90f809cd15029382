use crate::automation::AutomationError;
use crate::errors::EdgeSwitchError;

#[derive(Debug, thiserror::Error)]
pub enum TabError {
    #[error("{app} is not running")]
    BrowserNotRunning { app: String },

    #[error("Window {window_index} not found (only {window_count} windows open)")]
    WindowOutOfRange {
        window_index: usize,
        window_count: usize,
    },

    #[error("Tab {tab_index} not found in window {window_index} (only {tab_count} tabs)")]
    TabOutOfRange {
        window_index: usize,
        tab_index: usize,
        tab_count: usize,
    },

    #[error("Browser script error: {message}")]
    ScriptError { message: String },

    #[error("Failed to copy to clipboard: {message}")]
    ClipboardFailed { message: String },

    #[error(transparent)]
    Automation(#[from] AutomationError),
}

impl EdgeSwitchError for TabError {
    fn error_code(&self) -> &'static str {
        match self {
            TabError::BrowserNotRunning { .. } => "TAB_BROWSER_NOT_RUNNING",
            TabError::WindowOutOfRange { .. } => "TAB_WINDOW_OUT_OF_RANGE",
            TabError::TabOutOfRange { .. } => "TAB_OUT_OF_RANGE",
            TabError::ScriptError { .. } => "TAB_SCRIPT_ERROR",
            TabError::ClipboardFailed { .. } => "TAB_CLIPBOARD_FAILED",
            TabError::Automation(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            TabError::BrowserNotRunning { .. }
            | TabError::WindowOutOfRange { .. }
            | TabError::TabOutOfRange { .. } => true,
            TabError::Automation(e) => e.is_user_error(),
            _ => false,
        }
    }
}
