use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use super::errors::TabError;
use super::scripts;
use super::types::RawTab;
use crate::automation::{OsascriptRunner, ScriptRunner, decode_json};
use crate::config::EdgeSwitchConfig;

/// Where raw tab listings come from.
pub trait TabSource {
    fn raw_tabs(&self) -> Result<Vec<RawTab>, TabError>;
}

/// Scripting-bridge access to one browser application.
#[derive(Debug, Clone)]
pub struct BrowserAutomation<R = OsascriptRunner> {
    pub(crate) app_name: String,
    pub(crate) runner: R,
}

impl BrowserAutomation<OsascriptRunner> {
    pub fn from_config(config: &EdgeSwitchConfig) -> Self {
        let timeout = Duration::from_millis(config.automation.script_timeout_ms);
        Self::new(&config.browser.process_name, OsascriptRunner::new(timeout))
    }
}

impl<R: ScriptRunner> BrowserAutomation<R> {
    pub fn new(app_name: &str, runner: R) -> Self {
        Self {
            app_name: app_name.to_string(),
            runner,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub(crate) fn is_running(&self) -> bool {
        self.runner.app_running(&self.app_name)
    }
}

#[derive(Debug, Deserialize)]
struct TabListing {
    #[serde(default)]
    tabs: Vec<RawTab>,
    error: Option<String>,
}

impl<R: ScriptRunner> TabSource for BrowserAutomation<R> {
    /// Lists nothing when the browser is not running.
    fn raw_tabs(&self) -> Result<Vec<RawTab>, TabError> {
        if !self.is_running() {
            info!(
                event = "core.tabs.list_skipped",
                app = %self.app_name,
                reason = "not_running"
            );
            return Ok(Vec::new());
        }

        info!(event = "core.tabs.list_started", app = %self.app_name);
        let stdout = self.runner.run_jxa(&scripts::list_tabs(&self.app_name))?;
        let listing: TabListing = decode_json(&stdout)?;

        if let Some(message) = listing.error {
            warn!(
                event = "core.tabs.list_failed",
                app = %self.app_name,
                error = %message
            );
            return Err(TabError::ScriptError { message });
        }

        info!(
            event = "core.tabs.list_completed",
            count = listing.tabs.len()
        );
        Ok(listing.tabs)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::automation::{AutomationError, ScriptRunner};

    /// Replays canned script output and records every script it was given.
    pub struct ScriptedRunner {
        pub running: bool,
        pub replies: RefCell<VecDeque<Result<String, AutomationError>>>,
        pub scripts: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        pub fn new(replies: Vec<Result<String, AutomationError>>) -> Self {
            Self {
                running: true,
                replies: RefCell::new(replies.into()),
                scripts: RefCell::new(Vec::new()),
            }
        }

        pub fn not_running() -> Self {
            Self {
                running: false,
                ..Self::new(Vec::new())
            }
        }

        pub fn ok(reply: &str) -> Result<String, AutomationError> {
            Ok(reply.to_string())
        }
    }

    impl ScriptRunner for ScriptedRunner {
        fn run_jxa(&self, script: &str) -> Result<String, AutomationError> {
            self.scripts.borrow_mut().push(script.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected script: {script}"))
        }

        fn app_running(&self, _process_name: &str) -> bool {
            self.running
        }
    }
}
