use std::time::Duration;

use super::errors::AutomationError;
use super::osascript::{ScriptLanguage, run_osascript};
use super::presence::is_process_running;

/// Executes browser automation scripts.
pub trait ScriptRunner {
    /// Run a JXA script and return its trimmed stdout.
    fn run_jxa(&self, script: &str) -> Result<String, AutomationError>;

    fn app_running(&self, process_name: &str) -> bool {
        is_process_running(process_name)
    }
}

/// Runs scripts with the system `osascript`.
#[derive(Debug, Clone, Copy)]
pub struct OsascriptRunner {
    timeout: Duration,
}

impl OsascriptRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl ScriptRunner for OsascriptRunner {
    fn run_jxa(&self, script: &str) -> Result<String, AutomationError> {
        run_osascript(script, ScriptLanguage::JavaScript, self.timeout)
    }
}
