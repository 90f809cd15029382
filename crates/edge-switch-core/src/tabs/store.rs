use tracing::info;

use super::errors::TabError;
use super::source::TabSource;
use super::types::{BrowserTab, RawTab};
use crate::profiles::BrowserProfile;
use crate::workspaces::BrowserWorkspace;

const FALLBACK_PROFILE_DIR: &str = "Default";
const FALLBACK_PROFILE_NAME: &str = "Default Profile";

/// Workspace shown by a window: exact name first, then the first workspace
/// whose name appears inside the window name.
fn workspace_for_window<'a>(
    window_name: &str,
    workspaces: &'a [BrowserWorkspace],
) -> Option<&'a BrowserWorkspace> {
    workspaces
        .iter()
        .find(|ws| ws.name == window_name)
        .or_else(|| workspaces.iter().find(|ws| window_name.contains(&ws.name)))
}

struct ProfileRef<'a> {
    dir: &'a str,
    name: &'a str,
    email: &'a str,
}

fn profile_for_tab<'a>(
    raw: &RawTab,
    workspace: Option<&BrowserWorkspace>,
    profiles: &'a [BrowserProfile],
) -> ProfileRef<'a> {
    let by_title = raw
        .profile_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .and_then(|name| profiles.iter().find(|p| p.display_name == name));
    let by_workspace = || {
        workspace.and_then(|ws| profiles.iter().find(|p| p.dir_name == ws.profile_dir))
    };

    match by_title.or_else(by_workspace) {
        Some(profile) => ProfileRef {
            dir: &profile.dir_name,
            name: &profile.display_name,
            email: profile.email.as_deref().unwrap_or(""),
        },
        None => ProfileRef {
            dir: FALLBACK_PROFILE_DIR,
            name: FALLBACK_PROFILE_NAME,
            email: "",
        },
    }
}

/// Attach profile and workspace information to raw tab listings.
pub fn correlate_tabs(
    raw_tabs: Vec<RawTab>,
    profiles: &[BrowserProfile],
    workspaces: &[BrowserWorkspace],
) -> Vec<BrowserTab> {
    raw_tabs
        .into_iter()
        .map(|raw| {
            let window_name = raw.window_name.clone().unwrap_or_default();
            let workspace = workspace_for_window(&window_name, workspaces);
            let profile = profile_for_tab(&raw, workspace, profiles);

            BrowserTab {
                title: raw.title.clone().unwrap_or_else(|| "Untitled".to_string()),
                url: raw.url.clone().unwrap_or_else(|| "about:blank".to_string()),
                window_index: raw.window_index,
                window_id: raw.window_id,
                tab_index: raw.tab_index,
                active: raw.active,
                profile_name: profile.name.to_string(),
                profile_email: profile.email.to_string(),
                profile_dir: profile.dir.to_string(),
                workspace_name: workspace.map(|ws| ws.name.clone()),
                workspace_id: workspace.map(|ws| ws.id.clone()),
                workspace_shared: workspace.is_some_and(|ws| ws.shared),
                window_name,
            }
        })
        .collect()
}

/// The open tabs at the moment of loading.
#[derive(Debug, Clone, Default)]
pub struct TabStore {
    tabs: Vec<BrowserTab>,
}

impl TabStore {
    pub fn new(tabs: Vec<BrowserTab>) -> Self {
        Self { tabs }
    }

    pub fn load<S: TabSource + ?Sized>(
        source: &S,
        profiles: &[BrowserProfile],
        workspaces: &[BrowserWorkspace],
    ) -> Result<Self, TabError> {
        let tabs = correlate_tabs(source.raw_tabs()?, profiles, workspaces);
        info!(event = "core.tabs.load_completed", count = tabs.len());
        Ok(Self::new(tabs))
    }

    pub fn all(&self) -> &[BrowserTab] {
        &self.tabs
    }

    /// Ranked matches for `query`; ties keep listing order. An empty query
    /// returns every tab.
    pub fn search(&self, query: &str) -> Vec<&BrowserTab> {
        if query.is_empty() {
            return self.tabs.iter().collect();
        }

        let query_lower = query.to_lowercase();
        let mut scored: Vec<(u32, &BrowserTab)> = self
            .tabs
            .iter()
            .map(|tab| (tab.score(&query_lower), tab))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(a, _), (b, _)| b.cmp(a));
        scored.into_iter().map(|(_, tab)| tab).collect()
    }

    pub fn find_by_indices(&self, window_index: usize, tab_index: usize) -> Option<&BrowserTab> {
        self.tabs
            .iter()
            .find(|tab| tab.window_index == window_index && tab.tab_index == tab_index)
    }
}
