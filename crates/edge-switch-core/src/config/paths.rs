//! On-disk layout of the browser installation and its user data.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::config::defaults::DEFAULT_USER_DATA_SUBDIR;
use crate::config::types::BrowserConfig;

impl BrowserConfig {
    /// Root of the browser's user data (`Local State`, profile directories).
    pub fn user_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.user_data_dir {
            return dir.clone();
        }
        match dirs::home_dir() {
            Some(home) => home.join(DEFAULT_USER_DATA_SUBDIR),
            None => PathBuf::from("/").join(DEFAULT_USER_DATA_SUBDIR),
        }
    }

    /// The `Local State` file holding the profile info cache.
    pub fn local_state_path(&self) -> PathBuf {
        self.user_data_dir().join("Local State")
    }

    pub fn profile_dir_path(&self, dir_name: &str) -> PathBuf {
        self.user_data_dir().join(dir_name)
    }

    /// Workspace metadata cache of one profile.
    pub fn workspaces_cache_path(&self, dir_name: &str) -> PathBuf {
        self.profile_dir_path(dir_name)
            .join("Workspaces")
            .join("WorkspacesCache")
    }

    /// Executable inside an application bundle.
    pub fn binary_in_app(&self, app_path: &Path) -> PathBuf {
        app_path
            .join("Contents")
            .join("MacOS")
            .join(&self.process_name)
    }

    /// Resolve the browser executable.
    ///
    /// Resolution order: explicit binary, `EDGE_APP` bundle, configured app
    /// bundle, Spotlight lookup by bundle identifier. Falls back to the
    /// configured bundle path, which may not exist; callers check `exists()`
    /// before launching.
    pub fn find_binary(&self) -> PathBuf {
        if let Some(binary) = &self.binary {
            if binary.exists() {
                return binary.clone();
            }
            warn!(
                event = "core.config.binary_missing",
                path = %binary.display()
            );
        }

        if let Some(env_app) = &self.env_app_path {
            let from_env_app = self.binary_in_app(env_app);
            if from_env_app.exists() {
                return from_env_app;
            }
            debug!(
                event = "core.config.env_app_missing",
                path = %env_app.display()
            );
        }

        let from_app = self.binary_in_app(&self.app_path);
        if from_app.exists() {
            return from_app;
        }

        if let Some(found) = self.find_app_with_spotlight() {
            return found;
        }

        from_app
    }

    fn find_app_with_spotlight(&self) -> Option<PathBuf> {
        let query = format!(
            "kMDItemCFBundleIdentifier == '{}' && kMDItemKind == 'Application'",
            self.bundle_id
        );

        let output = match Command::new("mdfind").arg(&query).output() {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                debug!(
                    event = "core.config.spotlight_failed",
                    status = ?output.status.code()
                );
                return None;
            }
            Err(e) => {
                debug!(event = "core.config.spotlight_unavailable", error = %e);
                return None;
            }
        };

        let app_suffix = format!("{}.app", self.process_name);
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(Path::new)
            .filter(|candidate| {
                candidate
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().ends_with(&app_suffix))
            })
            .map(|app| self.binary_in_app(app))
            .find(|binary| binary.exists())
    }
}
