use clap::ArgMatches;
use tracing::warn;

use edge_switch_core::EdgeSwitchConfig;

use super::UsageError;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> EdgeSwitchConfig {
    match EdgeSwitchConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.edge-switch/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            EdgeSwitchConfig::default()
        }
    }
}

/// Query words joined by single spaces, trimmed.
pub fn query_from(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("query")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Parse a `<window_index>:<tab_index>` reference. Both indices are 1-based.
pub fn parse_tab_ref(value: &str) -> Result<(usize, usize), UsageError> {
    let invalid = || {
        UsageError::new(format!(
            "Invalid tab reference '{value}'. Expected format: <window_index>:<tab_index>"
        ))
    };

    let (window, tab) = value.split_once(':').ok_or_else(invalid)?;
    let window: usize = window.trim().parse().map_err(|_| invalid())?;
    let tab: usize = tab.trim().parse().map_err(|_| invalid())?;
    if window == 0 || tab == 0 {
        return Err(invalid());
    }
    Ok((window, tab))
}

/// Parse a `<workspace_id>|<profile_dir>` reference.
pub fn parse_workspace_ref(value: &str) -> Result<(String, String), UsageError> {
    let parts: Vec<&str> = value.split('|').collect();
    match parts.as_slice() {
        [id, profile_dir] if !id.is_empty() => Ok((id.to_string(), profile_dir.to_string())),
        _ => Err(UsageError::new(format!(
            "Invalid workspace reference '{value}'. Expected format: <workspace_id>|<profile_dir>"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_ref() {
        assert_eq!(parse_tab_ref("2:5").unwrap(), (2, 5));
        assert_eq!(parse_tab_ref(" 1 : 3 ").unwrap(), (1, 3));
    }

    #[test]
    fn test_parse_tab_ref_rejects_malformed() {
        for bad in ["", "2", "2:", ":5", "a:b", "2:5:1", "-1:2", "0:1", "1:0"] {
            assert!(parse_tab_ref(bad).is_err(), "accepted {bad:?}");
        }
        let message = parse_tab_ref("x").unwrap_err().to_string();
        assert!(message.contains("<window_index>:<tab_index>"));
    }

    #[test]
    fn test_parse_workspace_ref() {
        assert_eq!(
            parse_workspace_ref("ws-1|Profile 1").unwrap(),
            ("ws-1".to_string(), "Profile 1".to_string())
        );
        assert_eq!(
            parse_workspace_ref("ws-1|").unwrap(),
            ("ws-1".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_workspace_ref_rejects_malformed() {
        for bad in ["ws-1", "|Default", "a|b|c", ""] {
            assert!(parse_workspace_ref(bad).is_err(), "accepted {bad:?}");
        }
    }
}
