use std::path::PathBuf;

use tracing::{info, warn};

use super::errors::LaunchError;
use super::spawner::ProcessSpawner;
use crate::automation::ScriptRunner;
use crate::config::BrowserConfig;
use crate::profiles::ProfileStore;
use crate::profiles::store::DEFAULT_PROFILE_DIR;
use crate::tabs::BrowserAutomation;
use crate::window::{AccessibilityLayer, RaiseRequest, WindowServer, list_windows, raise_window};
use crate::workspaces::WorkspaceStore;

/// How `open_workspace` brought the workspace up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceOutcome {
    /// A window already showing the workspace was raised.
    Raised,
    /// The browser was asked to open the workspace.
    Launched,
}

pub fn profile_args(profile_dir: &str, url: Option<&str>) -> Vec<String> {
    let mut args = vec![format!("--profile-directory={profile_dir}")];
    if let Some(url) = url.filter(|url| !url.is_empty()) {
        args.push(url.to_string());
    }
    args
}

/// The `Default` profile is the browser's implicit choice and gets no
/// profile flag.
pub fn workspace_args(workspace_id: &str, profile_dir: &str) -> Vec<String> {
    let mut args = Vec::new();
    if !profile_dir.is_empty() && profile_dir != DEFAULT_PROFILE_DIR {
        args.push(format!("--profile-directory={profile_dir}"));
    }
    args.push(format!("--launch-workspace={workspace_id}"));
    args
}

/// Launches the configured browser.
pub struct Launcher<'a, P: ?Sized, R> {
    pub browser: &'a BrowserConfig,
    pub spawner: &'a P,
    pub automation: &'a BrowserAutomation<R>,
}

impl<P, R> Launcher<'_, P, R>
where
    P: ProcessSpawner + ?Sized,
    R: ScriptRunner,
{
    fn binary(&self) -> Result<PathBuf, LaunchError> {
        let binary = self.browser.find_binary();
        if binary.exists() {
            Ok(binary)
        } else {
            Err(LaunchError::BinaryNotFound { path: binary })
        }
    }

    fn spawn(&self, args: &[String]) -> Result<(), LaunchError> {
        let binary = self.binary()?;
        info!(
            event = "core.launch.spawn_started",
            binary = %binary.display(),
            args = ?args
        );
        self.spawner
            .spawn(&binary, args)
            .map_err(|e| LaunchError::SpawnFailed {
                message: format!("{}: {e}", binary.display()),
            })
    }

    /// Open a window of `profile_dir`, optionally at `url`, and bring the
    /// browser to the front.
    pub fn open_profile(
        &self,
        profiles: &ProfileStore,
        profile_dir: &str,
        url: Option<&str>,
    ) -> Result<(), LaunchError> {
        info!(
            event = "core.launch.open_profile_started",
            profile_dir = profile_dir
        );

        if profiles.find(profile_dir).is_none() {
            return Err(LaunchError::ProfileNotFound {
                profile_dir: profile_dir.to_string(),
            });
        }

        self.spawn(&profile_args(profile_dir, url))?;

        if let Err(e) = self.automation.activate() {
            warn!(
                event = "core.launch.activate_failed",
                error = %e,
                message = "Browser launched but could not be brought to the front"
            );
        }

        info!(
            event = "core.launch.open_profile_completed",
            profile_dir = profile_dir
        );
        Ok(())
    }

    /// Show a workspace. A window already showing it is raised on its own;
    /// otherwise the browser is launched with the workspace.
    ///
    /// An empty `profile_dir` means the workspace's own profile.
    pub fn open_workspace<S, A>(
        &self,
        server: &S,
        layer: &A,
        workspaces: &WorkspaceStore,
        workspace_id: &str,
        profile_dir: &str,
    ) -> Result<WorkspaceOutcome, LaunchError>
    where
        S: WindowServer + ?Sized,
        A: AccessibilityLayer + ?Sized,
    {
        info!(
            event = "core.launch.open_workspace_started",
            workspace_id = workspace_id,
            profile_dir = profile_dir
        );

        let workspace =
            workspaces
                .find_by_id(workspace_id)
                .ok_or_else(|| LaunchError::WorkspaceNotFound {
                    workspace_id: workspace_id.to_string(),
                })?;

        if self.raise_open_workspace(server, layer, &workspace.name) {
            info!(
                event = "core.launch.open_workspace_completed",
                workspace_id = workspace_id,
                outcome = "raised"
            );
            return Ok(WorkspaceOutcome::Raised);
        }

        let profile_dir = if profile_dir.is_empty() {
            workspace.profile_dir.as_str()
        } else {
            profile_dir
        };
        self.spawn(&workspace_args(workspace_id, profile_dir))?;

        info!(
            event = "core.launch.open_workspace_completed",
            workspace_id = workspace_id,
            outcome = "launched"
        );
        Ok(WorkspaceOutcome::Launched)
    }

    /// Raise the physical window whose scripting-order position matches the
    /// window named after the workspace. Only workspaces listed by
    /// `active_workspace_names` are looked up.
    fn raise_open_workspace<S, A>(&self, server: &S, layer: &A, workspace_name: &str) -> bool
    where
        S: WindowServer + ?Sized,
        A: AccessibilityLayer + ?Sized,
    {
        match self.automation.active_workspace_names() {
            Ok(active) if active.contains(workspace_name) => {}
            Ok(_) => return false,
            Err(e) => {
                warn!(
                    event = "core.launch.active_workspaces_failed",
                    error = %e
                );
                return false;
            }
        }

        let names = match self.automation.window_names() {
            Ok(names) => names,
            Err(e) => {
                warn!(
                    event = "core.launch.window_names_failed",
                    error = %e
                );
                return false;
            }
        };

        let Some(position) = names
            .iter()
            .position(|name| name.as_deref() == Some(workspace_name))
        else {
            return false;
        };

        let windows = list_windows(server, self.automation.app_name());
        let Some(record) = windows.get(position) else {
            warn!(
                event = "core.launch.workspace_window_missing",
                position = position,
                windows = windows.len()
            );
            return false;
        };

        match raise_window(layer, RaiseRequest::from(record)) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    event = "core.launch.workspace_raise_failed",
                    error = %e,
                    message = "Launching the workspace instead"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::tabs::source::test_support::ScriptedRunner;
    use crate::window::RawWindow;
    use crate::workspaces::types::test_support::workspace;

    const APP: &str = "Microsoft Edge";

    #[derive(Default)]
    struct RecordingSpawner {
        calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    }

    impl ProcessSpawner for RecordingSpawner {
        fn spawn(&self, program: &Path, args: &[String]) -> std::io::Result<()> {
            self.calls
                .borrow_mut()
                .push((program.to_path_buf(), args.to_vec()));
            Ok(())
        }
    }

    struct Windows(Vec<RawWindow>);

    impl WindowServer for Windows {
        fn on_screen_windows(&self) -> Option<Vec<RawWindow>> {
            Some(self.0.clone())
        }
    }

    struct Layer {
        raised: RefCell<Vec<u32>>,
    }

    impl AccessibilityLayer for Layer {
        type Window = u32;

        fn windows(&self, _pid: i32) -> Result<Vec<u32>, i32> {
            Ok(vec![11, 22])
        }

        fn window_number(&self, window: &u32) -> Option<u32> {
            Some(*window)
        }

        fn activate_application(&self, _pid: i32) -> bool {
            true
        }

        fn raise(&self, window: &u32) -> Result<(), i32> {
            self.raised.borrow_mut().push(*window);
            Ok(())
        }
    }

    struct Fixture {
        _dir: TempDir,
        browser: BrowserConfig,
        binary: PathBuf,
    }

    fn fixture(with_binary: bool) -> Fixture {
        let dir = TempDir::new().unwrap();
        let binary = dir.path().join("edge");
        if with_binary {
            fs::write(&binary, "").unwrap();
        }
        let browser = BrowserConfig {
            binary: Some(binary.clone()),
            app_path: dir.path().join("Missing.app"),
            bundle_id: "invalid.edge-switch.test".to_string(),
            user_data_dir: Some(dir.path().to_path_buf()),
            ..BrowserConfig::default()
        };
        Fixture {
            _dir: dir,
            browser,
            binary,
        }
    }

    fn profiles(fx: &Fixture) -> ProfileStore {
        fs::write(
            fx.browser.local_state_path(),
            r#"{"profile": {"info_cache": {"Default": {"name": "Personal"}, "Profile 1": {"name": "Work"}}}}"#,
        )
        .unwrap();
        let mut store = ProfileStore::from_config(&fx.browser);
        store.load();
        store
    }

    fn edge_window(number: u32) -> RawWindow {
        RawWindow {
            owner_name: APP.to_string(),
            pid: 77,
            window_number: number,
            title: None,
        }
    }

    #[test]
    fn test_profile_args() {
        assert_eq!(profile_args("Profile 1", None), vec!["--profile-directory=Profile 1"]);
        assert_eq!(
            profile_args("Default", Some("https://example.com")),
            vec!["--profile-directory=Default", "https://example.com"]
        );
    }

    #[test]
    fn test_workspace_args_omit_default_profile() {
        assert_eq!(workspace_args("ws-1", "Default"), vec!["--launch-workspace=ws-1"]);
        assert_eq!(
            workspace_args("ws-1", "Profile 2"),
            vec!["--profile-directory=Profile 2", "--launch-workspace=ws-1"]
        );
    }

    #[test]
    fn test_open_profile_spawns_and_activates() {
        let fx = fixture(true);
        let profiles = profiles(&fx);
        let spawner = RecordingSpawner::default();
        let automation = BrowserAutomation::new(APP, ScriptedRunner::new(vec![ScriptedRunner::ok("")]));
        let launcher = Launcher {
            browser: &fx.browser,
            spawner: &spawner,
            automation: &automation,
        };

        launcher
            .open_profile(&profiles, "Profile 1", Some("https://example.com"))
            .unwrap();

        let calls = spawner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, fx.binary);
        assert_eq!(
            calls[0].1,
            vec!["--profile-directory=Profile 1", "https://example.com"]
        );
        assert!(automation.runner.scripts.borrow()[0].contains(".activate()"));
    }

    #[test]
    fn test_open_profile_rejects_unknown_profile() {
        let fx = fixture(true);
        let profiles = profiles(&fx);
        let spawner = RecordingSpawner::default();
        let automation = BrowserAutomation::new(APP, ScriptedRunner::new(Vec::new()));
        let launcher = Launcher {
            browser: &fx.browser,
            spawner: &spawner,
            automation: &automation,
        };

        let err = launcher.open_profile(&profiles, "Profile 9", None).unwrap_err();
        assert!(matches!(err, LaunchError::ProfileNotFound { .. }));
        assert!(spawner.calls.borrow().is_empty());
    }

    #[test]
    fn test_open_profile_reports_missing_binary() {
        let fx = fixture(false);
        let profiles = profiles(&fx);
        let spawner = RecordingSpawner::default();
        let automation = BrowserAutomation::new(APP, ScriptedRunner::new(Vec::new()));
        let launcher = Launcher {
            browser: &fx.browser,
            spawner: &spawner,
            automation: &automation,
        };

        let err = launcher.open_profile(&profiles, "Default", None).unwrap_err();
        assert!(matches!(err, LaunchError::BinaryNotFound { .. }));
        assert!(spawner.calls.borrow().is_empty());
    }

    #[test]
    fn test_open_workspace_raises_window_already_showing_it() {
        let fx = fixture(true);
        let spawner = RecordingSpawner::default();
        let automation = BrowserAutomation::new(
            APP,
            ScriptedRunner::new(vec![
                ScriptedRunner::ok(r#"["Main", "Research"]"#),
                ScriptedRunner::ok(r#"["Main", "Research"]"#),
            ]),
        );
        let launcher = Launcher {
            browser: &fx.browser,
            spawner: &spawner,
            automation: &automation,
        };
        let workspaces = WorkspaceStore::new(vec![workspace("ws-r", "Research", 1.0)]);
        let layer = Layer {
            raised: RefCell::new(Vec::new()),
        };

        let outcome = launcher
            .open_workspace(
                &Windows(vec![edge_window(11), edge_window(22)]),
                &layer,
                &workspaces,
                "ws-r",
                "Default",
            )
            .unwrap();

        assert_eq!(outcome, WorkspaceOutcome::Raised);
        assert_eq!(*layer.raised.borrow(), vec![22]);
        assert!(spawner.calls.borrow().is_empty());
    }

    #[test]
    fn test_open_workspace_launches_when_not_open() {
        let fx = fixture(true);
        let spawner = RecordingSpawner::default();
        let automation =
            BrowserAutomation::new(APP, ScriptedRunner::new(vec![ScriptedRunner::ok(r#"["Main"]"#)]));
        let launcher = Launcher {
            browser: &fx.browser,
            spawner: &spawner,
            automation: &automation,
        };
        let mut research = workspace("ws-r", "Research", 1.0);
        research.profile_dir = "Profile 1".to_string();
        let workspaces = WorkspaceStore::new(vec![research]);
        let layer = Layer {
            raised: RefCell::new(Vec::new()),
        };

        let outcome = launcher
            .open_workspace(&Windows(Vec::new()), &layer, &workspaces, "ws-r", "")
            .unwrap();

        assert_eq!(outcome, WorkspaceOutcome::Launched);
        assert_eq!(
            spawner.calls.borrow()[0].1,
            vec!["--profile-directory=Profile 1", "--launch-workspace=ws-r"]
        );
        // Not among the active workspace names, so no positional lookup ran
        assert_eq!(automation.runner.scripts.borrow().len(), 1);
    }

    #[test]
    fn test_open_workspace_rejects_unknown_id() {
        let fx = fixture(true);
        let spawner = RecordingSpawner::default();
        let automation = BrowserAutomation::new(APP, ScriptedRunner::new(Vec::new()));
        let launcher = Launcher {
            browser: &fx.browser,
            spawner: &spawner,
            automation: &automation,
        };
        let layer = Layer {
            raised: RefCell::new(Vec::new()),
        };

        let err = launcher
            .open_workspace(&Windows(Vec::new()), &layer, &WorkspaceStore::default(), "nope", "Default")
            .unwrap_err();
        assert!(matches!(err, LaunchError::WorkspaceNotFound { .. }));
    }
}
