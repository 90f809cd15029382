use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::types::BrowserProfile;
use crate::config::BrowserConfig;

pub const DEFAULT_PROFILE_DIR: &str = "Default";

#[derive(Debug, Default, Deserialize)]
struct LocalState {
    #[serde(default)]
    profile: Option<ProfileSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileSection {
    #[serde(default)]
    info_cache: Option<BTreeMap<String, ProfileInfo>>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileInfo {
    name: Option<String>,
    gaia_given_name: Option<String>,
    gaia_name: Option<String>,
    user_name: Option<String>,
    gaia_email: Option<String>,
    is_omitted_from_ui: Option<bool>,
    /// Chromium's name for `is_omitted_from_ui`
    is_omitted_from_profile_list: Option<bool>,
    avatar_icon: Option<String>,
    profile_avatar: Option<String>,
    gaia_picture_file_name: Option<String>,
}

/// First candidate that is present and non-empty.
fn first_non_empty<'a>(candidates: impl IntoIterator<Item = &'a Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .cloned()
}

impl ProfileInfo {
    fn into_profile(self, dir_name: String) -> BrowserProfile {
        let display_name = first_non_empty([&self.name, &self.gaia_given_name, &self.gaia_name])
            .unwrap_or_else(|| dir_name.clone());

        BrowserProfile {
            display_name,
            email: first_non_empty([&self.user_name, &self.gaia_email]),
            is_omitted_from_ui: self
                .is_omitted_from_ui
                .or(self.is_omitted_from_profile_list),
            avatar_icon: first_non_empty([&self.avatar_icon, &self.profile_avatar]),
            gaia_picture_file_name: first_non_empty([&self.gaia_picture_file_name]),
            dir_name,
        }
    }
}

/// Parse the profiles out of a `Local State` document.
///
/// Profiles hidden from the picker are dropped. `Default` sorts first, the
/// rest by display name, case-insensitively.
pub fn parse_local_state(content: &str) -> Result<Vec<BrowserProfile>, serde_json::Error> {
    let state: LocalState = serde_json::from_str(content)?;
    let info_cache = state
        .profile
        .and_then(|section| section.info_cache)
        .unwrap_or_default();

    let mut profiles: Vec<BrowserProfile> = info_cache
        .into_iter()
        .map(|(dir_name, info)| info.into_profile(dir_name))
        .filter(|profile| profile.is_omitted_from_ui != Some(true))
        .collect();

    profiles.sort_by_key(|p| (p.dir_name != DEFAULT_PROFILE_DIR, p.display_name.to_lowercase()));
    Ok(profiles)
}

/// Profiles of one browser installation.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    local_state: PathBuf,
    profiles: Vec<BrowserProfile>,
}

impl ProfileStore {
    pub fn new(local_state: PathBuf) -> Self {
        Self {
            local_state,
            profiles: Vec::new(),
        }
    }

    pub fn from_config(browser: &BrowserConfig) -> Self {
        Self::new(browser.local_state_path())
    }

    /// Read the profiles from disk. A missing or unreadable `Local State`
    /// leaves the store empty.
    pub fn load(&mut self) -> &[BrowserProfile] {
        info!(
            event = "core.profiles.load_started",
            path = %self.local_state.display()
        );

        self.profiles = match fs::read_to_string(&self.local_state) {
            Ok(content) => match parse_local_state(&content) {
                Ok(profiles) => profiles,
                Err(e) => {
                    warn!(
                        event = "core.profiles.parse_failed",
                        path = %self.local_state.display(),
                        error = %e
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                debug!(
                    event = "core.profiles.read_failed",
                    path = %self.local_state.display(),
                    error = %e
                );
                Vec::new()
            }
        };

        info!(
            event = "core.profiles.load_completed",
            count = self.profiles.len()
        );
        &self.profiles
    }

    pub fn all(&self) -> &[BrowserProfile] {
        &self.profiles
    }

    /// Profiles containing every whitespace-separated query token in their
    /// name, directory or email. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&BrowserProfile> {
        let query = query.to_lowercase();
        let tokens: Vec<&str> = query.split_whitespace().collect();

        self.profiles
            .iter()
            .filter(|profile| {
                let text = profile.search_text();
                tokens.iter().all(|token| text.contains(token))
            })
            .collect()
    }

    pub fn find(&self, dir_name: &str) -> Option<&BrowserProfile> {
        self.profiles.iter().find(|p| p.dir_name == dir_name)
    }
}
