use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static AVATAR_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"IDR_PROFILE_AVATAR_(\d+)").expect("Invalid avatar pattern"));

/// A browser profile as listed in the profile picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserProfile {
    /// Directory name under the user data dir (`Default`, `Profile 1`, ...)
    pub dir_name: String,
    pub display_name: String,
    pub email: Option<String>,
    pub is_omitted_from_ui: Option<bool>,
    /// Built-in avatar resource, e.g. `chrome://theme/IDR_PROFILE_AVATAR_26`
    pub avatar_icon: Option<String>,
    pub gaia_picture_file_name: Option<String>,
}

impl BrowserProfile {
    /// Numeric id of the built-in avatar, if the profile uses one.
    pub fn avatar_id(&self) -> Option<&str> {
        let icon = self.avatar_icon.as_deref()?;
        AVATAR_ID_RE
            .captures(icon)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Lowercased text searched by profile queries.
    pub(crate) fn search_text(&self) -> String {
        [
            Some(self.display_name.as_str()),
            Some(self.dir_name.as_str()),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}
