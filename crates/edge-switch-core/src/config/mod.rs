//! # Configuration System
//!
//! TOML configuration for edge-switch.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Microsoft Edge in `/Applications`
//! 2. **User config** - `~/.edge-switch/config.toml`
//! 3. **Environment** - `EDGE_BIN`, `EDGE_APP`, `EDGE_BUNDLE_ID`, `EDGE_USER_DATA_DIR`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.edge-switch/config.toml
//! [browser]
//! process_name = "Microsoft Edge Beta"
//! app_path = "/Applications/Microsoft Edge Beta.app"
//! user_data_dir = "~/Library/Application Support/Microsoft Edge Beta"
//!
//! [automation]
//! script_timeout_ms = 3000
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use edge_switch_core::config::EdgeSwitchConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EdgeSwitchConfig::load_hierarchy()?;
//!     let local_state = config.browser.local_state_path();
//!     println!("{}", local_state.display());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod paths;
pub mod types;

pub use types::{AutomationConfig, BrowserConfig, EdgeSwitchConfig};

impl EdgeSwitchConfig {
    /// Load configuration from defaults, the user config file and the environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
