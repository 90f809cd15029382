use std::collections::BTreeSet;
use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::{info, warn};

use super::errors::TabError;
use super::scripts;
use super::source::BrowserAutomation;
use crate::automation::{ScriptRunner, decode_json};
use crate::window::{AccessibilityLayer, RaiseRequest, WindowServer, list_windows, raise_window};

/// How a tab switch brought the window forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Only the target window was raised.
    Raised,
    /// The browser was activated as a whole by the scripting bridge.
    Activated,
}

#[derive(Debug, Deserialize)]
struct TabReply {
    ok: bool,
    reason: Option<String>,
    count: Option<usize>,
    message: Option<String>,
}

impl<R: ScriptRunner> BrowserAutomation<R> {
    fn ensure_running(&self) -> Result<(), TabError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(TabError::BrowserNotRunning {
                app: self.app_name.clone(),
            })
        }
    }

    fn run_tab_script(
        &self,
        script: &str,
        window_index: usize,
        tab_index: usize,
    ) -> Result<(), TabError> {
        let stdout = self.runner.run_jxa(script)?;
        let reply: TabReply = decode_json(&stdout)?;
        if reply.ok {
            return Ok(());
        }

        let count = reply.count.unwrap_or(0);
        Err(match reply.reason.as_deref() {
            Some("not_running") => TabError::BrowserNotRunning {
                app: self.app_name.clone(),
            },
            Some("window") => TabError::WindowOutOfRange {
                window_index,
                window_count: count,
            },
            Some("tab") => TabError::TabOutOfRange {
                window_index,
                tab_index,
                tab_count: count,
            },
            _ => TabError::ScriptError {
                message: reply
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            },
        })
    }

    /// Bring one tab to the front. Indices are 1-based.
    ///
    /// The tab is selected first, then the physical window at the same
    /// position is raised on its own. When no such window can be raised the
    /// whole browser is activated through the scripting bridge instead.
    pub fn switch_to_tab<S, A>(
        &self,
        server: &S,
        layer: &A,
        window_index: usize,
        tab_index: usize,
    ) -> Result<SwitchOutcome, TabError>
    where
        S: WindowServer + ?Sized,
        A: AccessibilityLayer + ?Sized,
    {
        info!(
            event = "core.tabs.switch_started",
            window_index = window_index,
            tab_index = tab_index
        );
        self.ensure_running()?;

        let windows = list_windows(server, &self.app_name);
        let target = window_index
            .checked_sub(1)
            .and_then(|position| windows.get(position));

        if let Some(record) = target {
            self.run_tab_script(
                &scripts::select_tab(&self.app_name, window_index, tab_index),
                window_index,
                tab_index,
            )?;

            match raise_window(layer, RaiseRequest::from(record)) {
                Ok(()) => {
                    info!(
                        event = "core.tabs.switch_completed",
                        window_index = window_index,
                        tab_index = tab_index,
                        outcome = "raised"
                    );
                    return Ok(SwitchOutcome::Raised);
                }
                Err(e) => warn!(
                    event = "core.tabs.targeted_raise_failed",
                    window_index = window_index,
                    error = %e,
                    message = "Falling back to activating the browser"
                ),
            }
        }

        self.run_tab_script(
            &scripts::front_tab(&self.app_name, window_index, tab_index),
            window_index,
            tab_index,
        )?;
        info!(
            event = "core.tabs.switch_completed",
            window_index = window_index,
            tab_index = tab_index,
            outcome = "activated"
        );
        Ok(SwitchOutcome::Activated)
    }

    pub fn close_tab(&self, window_index: usize, tab_index: usize) -> Result<(), TabError> {
        info!(
            event = "core.tabs.close_started",
            window_index = window_index,
            tab_index = tab_index
        );
        self.ensure_running()?;
        self.run_tab_script(
            &scripts::close_tab(&self.app_name, window_index, tab_index),
            window_index,
            tab_index,
        )?;
        info!(event = "core.tabs.close_completed");
        Ok(())
    }

    /// Names of the open browser windows in scripting order. A browser that
    /// is not running has none.
    pub fn window_names(&self) -> Result<Vec<Option<String>>, TabError> {
        if !self.is_running() {
            return Ok(Vec::new());
        }

        let stdout = self.runner.run_jxa(&scripts::window_names(&self.app_name))?;
        Ok(decode_json(&stdout)?)
    }

    /// Non-empty names of the open browser windows.
    pub fn active_workspace_names(&self) -> Result<BTreeSet<String>, TabError> {
        Ok(self
            .window_names()?
            .into_iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Bring the browser application to the front.
    pub fn activate(&self) -> Result<(), TabError> {
        self.runner.run_jxa(&scripts::activate(&self.app_name))?;
        Ok(())
    }
}

/// Put `url` on the system clipboard with `pbcopy`.
pub fn copy_url(url: &str) -> Result<(), TabError> {
    let mut child = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| TabError::ClipboardFailed {
            message: format!("Failed to run pbcopy: {e}"),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(url.as_bytes())
            .map_err(|e| TabError::ClipboardFailed {
                message: e.to_string(),
            })?;
    }

    let status = child.wait().map_err(|e| TabError::ClipboardFailed {
        message: e.to_string(),
    })?;
    if !status.success() {
        return Err(TabError::ClipboardFailed {
            message: format!("pbcopy exited with {status}"),
        });
    }

    info!(event = "core.tabs.url_copied", length = url.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::automation::AutomationError;
    use crate::tabs::source::test_support::ScriptedRunner;
    use crate::window::RawWindow;

    const APP: &str = "Microsoft Edge";
    const OK: &str = r#"{"ok": true}"#;

    struct Windows(Vec<RawWindow>);

    impl WindowServer for Windows {
        fn on_screen_windows(&self) -> Option<Vec<RawWindow>> {
            Some(self.0.clone())
        }
    }

    fn edge_window(number: u32) -> RawWindow {
        RawWindow {
            owner_name: APP.to_string(),
            pid: 4242,
            window_number: number,
            title: Some(format!("Window {number}")),
        }
    }

    /// Windows are their own window numbers; `raise_result` decides the raise.
    struct Layer {
        numbers: Vec<u32>,
        raise_result: Result<(), i32>,
        raised: RefCell<Vec<u32>>,
    }

    impl Layer {
        fn new(numbers: Vec<u32>, raise_result: Result<(), i32>) -> Self {
            Self {
                numbers,
                raise_result,
                raised: RefCell::new(Vec::new()),
            }
        }
    }

    impl AccessibilityLayer for Layer {
        type Window = u32;

        fn windows(&self, _pid: i32) -> Result<Vec<u32>, i32> {
            Ok(self.numbers.clone())
        }

        fn window_number(&self, window: &u32) -> Option<u32> {
            Some(*window)
        }

        fn activate_application(&self, _pid: i32) -> bool {
            true
        }

        fn raise(&self, window: &u32) -> Result<(), i32> {
            self.raised.borrow_mut().push(*window);
            self.raise_result
        }
    }

    fn automation(replies: Vec<Result<String, AutomationError>>) -> BrowserAutomation<ScriptedRunner> {
        BrowserAutomation::new(APP, ScriptedRunner::new(replies))
    }

    #[test]
    fn test_switch_raises_only_the_positional_window() {
        let server = Windows(vec![edge_window(10), edge_window(20), edge_window(30)]);
        let layer = Layer::new(vec![30, 20, 10], Ok(()));
        let automation = automation(vec![ScriptedRunner::ok(OK)]);

        let outcome = automation.switch_to_tab(&server, &layer, 2, 3).unwrap();

        assert_eq!(outcome, SwitchOutcome::Raised);
        assert_eq!(*layer.raised.borrow(), vec![20]);
        let scripts = automation.runner.scripts.borrow();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains("const winIdx = 2 - 1;"));
        assert!(!scripts[0].contains("app.activate()"));
    }

    #[test]
    fn test_switch_falls_back_when_raise_is_rejected() {
        let server = Windows(vec![edge_window(10)]);
        let layer = Layer::new(vec![10], Err(-25205));
        let automation = automation(vec![ScriptedRunner::ok(OK), ScriptedRunner::ok(OK)]);

        let outcome = automation.switch_to_tab(&server, &layer, 1, 1).unwrap();

        assert_eq!(outcome, SwitchOutcome::Activated);
        let scripts = automation.runner.scripts.borrow();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[1].contains("app.activate();"));
    }

    #[test]
    fn test_switch_without_physical_window_uses_activation() {
        let server = Windows(Vec::new());
        let layer = Layer::new(Vec::new(), Ok(()));
        let automation = automation(vec![ScriptedRunner::ok(OK)]);

        let outcome = automation.switch_to_tab(&server, &layer, 1, 2).unwrap();

        assert_eq!(outcome, SwitchOutcome::Activated);
        assert!(layer.raised.borrow().is_empty());
    }

    #[test]
    fn test_switch_reports_tab_range_without_raising() {
        let server = Windows(vec![edge_window(10)]);
        let layer = Layer::new(vec![10], Ok(()));
        let automation = automation(vec![ScriptedRunner::ok(
            r#"{"ok": false, "reason": "tab", "count": 3}"#,
        )]);

        let err = automation.switch_to_tab(&server, &layer, 1, 9).unwrap_err();

        assert_eq!(err.to_string(), "Tab 9 not found in window 1 (only 3 tabs)");
        assert!(layer.raised.borrow().is_empty());
    }

    #[test]
    fn test_switch_requires_running_browser() {
        let automation = BrowserAutomation::new(APP, ScriptedRunner::not_running());
        let err = automation
            .switch_to_tab(&Windows(Vec::new()), &Layer::new(Vec::new(), Ok(())), 1, 1)
            .unwrap_err();
        assert!(matches!(err, TabError::BrowserNotRunning { .. }));
    }

    #[test]
    fn test_close_tab_maps_window_range() {
        let automation = automation(vec![ScriptedRunner::ok(
            r#"{"ok": false, "reason": "window", "count": 2}"#,
        )]);
        let err = automation.close_tab(5, 1).unwrap_err();
        assert_eq!(err.to_string(), "Window 5 not found (only 2 windows open)");
    }

    #[test]
    fn test_close_tab_surfaces_script_message() {
        let automation = automation(vec![ScriptedRunner::ok(
            r#"{"ok": false, "reason": "error", "message": "Error: denied"}"#,
        )]);
        match automation.close_tab(1, 1).unwrap_err() {
            TabError::ScriptError { message } => assert_eq!(message, "Error: denied"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_active_workspace_names_drop_empty_and_null() {
        let automation = automation(vec![ScriptedRunner::ok(
            r#"["Research", "", null, "Main", "Research"]"#,
        )]);
        let names = automation.active_workspace_names().unwrap();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["Main", "Research"]);
    }

    #[test]
    fn test_window_names_keep_positions() {
        let automation = automation(vec![ScriptedRunner::ok(r#"["Main", null, "Research"]"#)]);
        assert_eq!(
            automation.window_names().unwrap(),
            vec![Some("Main".to_string()), None, Some("Research".to_string())]
        );
    }

    #[test]
    fn test_active_workspace_names_empty_when_not_running() {
        let automation = BrowserAutomation::new(APP, ScriptedRunner::not_running());
        assert!(automation.active_workspace_names().unwrap().is_empty());
    }
}
