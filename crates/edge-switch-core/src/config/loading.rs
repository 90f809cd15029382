//! Configuration loading.
//!
//! # Configuration Hierarchy
//!
//! 1. **Hardcoded defaults**
//! 2. **User config** - `~/.edge-switch/config.toml`
//! 3. **Environment** - `EDGE_BIN`, `EDGE_APP`, `EDGE_BUNDLE_ID`, `EDGE_USER_DATA_DIR`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::EdgeSwitchConfig;
use crate::errors::ConfigError;

pub const ENV_BROWSER_BINARY: &str = "EDGE_BIN";
pub const ENV_BROWSER_APP: &str = "EDGE_APP";
pub const ENV_BUNDLE_ID: &str = "EDGE_BUNDLE_ID";
pub const ENV_USER_DATA_DIR: &str = "EDGE_USER_DATA_DIR";

/// Load configuration from defaults, the user config file and the environment.
///
/// # Errors
///
/// Returns an error if the user config exists but cannot be read or parsed,
/// or if the merged configuration is invalid. A missing config file is not an error.
pub fn load_hierarchy() -> Result<EdgeSwitchConfig, ConfigError> {
    let mut config = match user_config_path() {
        Some(path) => load_config_file(&path)?.unwrap_or_default(),
        None => EdgeSwitchConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;

    Ok(config)
}

/// Location of the user config file, `~/.edge-switch/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".edge-switch").join("config.toml"))
}

/// Load a configuration file, returning `None` when it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<EdgeSwitchConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let mut config: EdgeSwitchConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    if let Some(dir) = config.browser.user_data_dir.take() {
        config.browser.user_data_dir = Some(expand_home(&dir));
    }

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Apply environment overrides. `lookup` returns the value of a variable, if set.
pub fn apply_env_overrides<F>(config: &mut EdgeSwitchConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(binary) = non_empty(ENV_BROWSER_BINARY) {
        config.browser.binary = Some(PathBuf::from(binary));
    }
    if let Some(app) = non_empty(ENV_BROWSER_APP) {
        config.browser.env_app_path = Some(PathBuf::from(app));
    }
    if let Some(bundle_id) = non_empty(ENV_BUNDLE_ID) {
        config.browser.bundle_id = bundle_id;
    }
    if let Some(dir) = non_empty(ENV_USER_DATA_DIR) {
        config.browser.user_data_dir = Some(expand_home(Path::new(&dir)));
    }
}

/// Validate the merged configuration.
pub fn validate_config(config: &EdgeSwitchConfig) -> Result<(), ConfigError> {
    if config.browser.process_name.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "browser.process_name must not be empty".to_string(),
        });
    }
    if config.automation.script_timeout_ms == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "automation.script_timeout_ms must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
