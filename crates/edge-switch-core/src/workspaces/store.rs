use std::fs;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::types::BrowserWorkspace;
use crate::config::BrowserConfig;
use crate::profiles::BrowserProfile;

static TAB_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+tabs?").expect("Invalid tab count pattern"));

#[derive(Debug, Deserialize)]
struct WorkspacesCache {
    #[serde(default)]
    workspaces: Vec<CachedWorkspace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedWorkspace {
    #[serde(default)]
    id: String,
    name: Option<String>,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    color: i64,
    #[serde(default)]
    menu_subtitle: String,
    #[serde(default, rename = "last_active_time")]
    last_active_time: f64,
    #[serde(default = "default_is_owner")]
    is_owner: bool,
    #[serde(default)]
    shared: bool,
}

fn default_is_owner() -> bool {
    true
}

fn parse_tab_count(menu_subtitle: &str) -> u32 {
    TAB_COUNT_RE
        .captures(menu_subtitle)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Parse one profile's `WorkspacesCache` document.
pub fn parse_workspaces_cache(
    content: &str,
    profile: &BrowserProfile,
) -> Result<Vec<BrowserWorkspace>, serde_json::Error> {
    let cache: WorkspacesCache = serde_json::from_str(content)?;

    Ok(cache
        .workspaces
        .into_iter()
        .map(|ws| BrowserWorkspace {
            tab_count: parse_tab_count(&ws.menu_subtitle),
            id: ws.id,
            name: ws.name.unwrap_or_else(|| "Unnamed".to_string()),
            profile_dir: profile.dir_name.clone(),
            profile_name: profile.display_name.clone(),
            profile_email: profile.email.clone().unwrap_or_default(),
            active: ws.active,
            color: ws.color,
            last_active_time: ws.last_active_time,
            is_owner: ws.is_owner,
            shared: ws.shared,
        })
        .collect())
}

/// Workspaces of every profile, most recently used first.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    workspaces: Vec<BrowserWorkspace>,
}

impl WorkspaceStore {
    pub fn new(mut workspaces: Vec<BrowserWorkspace>) -> Self {
        workspaces.sort_by(|a, b| b.last_active_time.total_cmp(&a.last_active_time));
        Self { workspaces }
    }

    /// Read the workspace cache of every given profile. Profiles without a
    /// cache, or with one that cannot be parsed, contribute nothing.
    pub fn load(browser: &BrowserConfig, profiles: &[BrowserProfile]) -> Self {
        info!(
            event = "core.workspaces.load_started",
            profiles = profiles.len()
        );

        let mut all = Vec::new();
        for profile in profiles {
            let path = browser.workspaces_cache_path(&profile.dir_name);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    debug!(
                        event = "core.workspaces.cache_unreadable",
                        profile = %profile.dir_name,
                        error = %e
                    );
                    continue;
                }
            };

            match parse_workspaces_cache(&content, profile) {
                Ok(workspaces) => all.extend(workspaces),
                Err(e) => warn!(
                    event = "core.workspaces.parse_failed",
                    path = %path.display(),
                    error = %e
                ),
            }
        }

        let store = Self::new(all);
        info!(
            event = "core.workspaces.load_completed",
            count = store.workspaces.len()
        );
        store
    }

    pub fn all(&self) -> &[BrowserWorkspace] {
        &self.workspaces
    }

    /// Ranked matches for `query`. An empty query returns every workspace in
    /// recency order.
    pub fn search(&self, query: &str) -> Vec<&BrowserWorkspace> {
        if query.is_empty() {
            return self.workspaces.iter().collect();
        }

        let query_lower = query.to_lowercase();
        let mut scored: Vec<(u32, &BrowserWorkspace)> = self
            .workspaces
            .iter()
            .map(|ws| (ws.score(&query_lower), ws))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| b.last_active_time.total_cmp(&a.last_active_time))
        });
        scored.into_iter().map(|(_, ws)| ws).collect()
    }

    pub fn find_by_id(&self, workspace_id: &str) -> Option<&BrowserWorkspace> {
        self.workspaces.iter().find(|ws| ws.id == workspace_id)
    }
}
