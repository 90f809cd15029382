//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [browser]
//! process_name = "Microsoft Edge"
//! app_path = "/Applications/Microsoft Edge.app"
//! bundle_id = "com.microsoft.edgemac"
//!
//! [automation]
//! script_timeout_ms = 5000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from `~/.edge-switch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EdgeSwitchConfig {
    /// Which browser installation to target
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Scripting bridge settings
    #[serde(default)]
    pub automation: AutomationConfig,
}

/// Identity and on-disk layout of the target browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Owning-application name reported by the window server. Matched
    /// case-sensitively against window owners and used as the scripting
    /// application name.
    #[serde(default = "super::defaults::default_process_name")]
    pub process_name: String,

    /// Application bundle location.
    #[serde(default = "super::defaults::default_app_path")]
    pub app_path: PathBuf,

    /// App bundle from `EDGE_APP`, tried before `app_path`.
    #[serde(skip)]
    pub env_app_path: Option<PathBuf>,

    /// Explicit browser executable, used when it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<PathBuf>,

    /// Bundle identifier used for the Spotlight fallback lookup.
    #[serde(default = "super::defaults::default_bundle_id")]
    pub bundle_id: String,

    /// Browser user data directory (holds `Local State` and the profile directories).
    /// Default: `~/Library/Application Support/Microsoft Edge`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data_dir: Option<PathBuf>,
}

/// Settings for `osascript` automation calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationConfig {
    /// Kill automation scripts that run longer than this.
    /// Default: 5000ms.
    #[serde(default = "super::defaults::default_script_timeout_ms")]
    pub script_timeout_ms: u64,
}
