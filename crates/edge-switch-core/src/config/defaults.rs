//! Default implementations for configuration types.
//!
//! Helper functions here double as serde `#[serde(default = "...")]` providers.

use crate::config::types::{AutomationConfig, BrowserConfig};
use std::path::PathBuf;

pub const DEFAULT_PROCESS_NAME: &str = "Microsoft Edge";
pub const DEFAULT_APP_PATH: &str = "/Applications/Microsoft Edge.app";
pub const DEFAULT_BUNDLE_ID: &str = "com.microsoft.edgemac";

/// User data directory relative to the home directory.
pub const DEFAULT_USER_DATA_SUBDIR: &str = "Library/Application Support/Microsoft Edge";

pub fn default_process_name() -> String {
    DEFAULT_PROCESS_NAME.to_string()
}

pub fn default_app_path() -> PathBuf {
    PathBuf::from(DEFAULT_APP_PATH)
}

pub fn default_bundle_id() -> String {
    DEFAULT_BUNDLE_ID.to_string()
}

/// Returns the default script timeout in milliseconds (5000ms).
///
/// Tab enumeration across many windows is the slowest script; 5 seconds
/// covers a few hundred tabs.
pub fn default_script_timeout_ms() -> u64 {
    5000
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            process_name: default_process_name(),
            app_path: default_app_path(),
            env_app_path: None,
            binary: None,
            bundle_id: default_bundle_id(),
            user_data_dir: None,
        }
    }
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            script_timeout_ms: default_script_timeout_ms(),
        }
    }
}
