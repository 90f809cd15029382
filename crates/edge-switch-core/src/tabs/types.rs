use serde::{Deserialize, Serialize};

/// One tab as reported by the scripting bridge, before correlation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTab {
    pub title: Option<String>,
    pub url: Option<String>,
    pub window_index: usize,
    pub window_id: i64,
    pub window_name: Option<String>,
    pub tab_index: usize,
    pub active: bool,
    /// Profile name parsed from the window title, when the title carries one
    pub profile_name: Option<String>,
}

/// An open tab with its profile and workspace resolved.
///
/// `window_index` and `tab_index` are 1-based positions in the scripting
/// bridge's window and tab order at the time of listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserTab {
    pub title: String,
    pub url: String,
    pub window_index: usize,
    pub window_id: i64,
    pub window_name: String,
    pub tab_index: usize,
    pub active: bool,
    pub profile_name: String,
    pub profile_email: String,
    pub profile_dir: String,
    pub workspace_name: Option<String>,
    pub workspace_id: Option<String>,
    pub workspace_shared: bool,
}

impl BrowserTab {
    /// Relevance for a lowercased query; the first matching rule wins, the
    /// active bonus is added on top. Zero means no match.
    pub(crate) fn score(&self, query_lower: &str) -> u32 {
        let title = self.title.to_lowercase();
        let url = self.url.to_lowercase();

        let mut score = if title == query_lower {
            1000
        } else if url == query_lower {
            900
        } else if title.contains(query_lower) {
            if title.starts_with(query_lower) { 600 } else { 500 }
        } else if url.contains(query_lower) {
            let domain_hit = url.contains(&format!("://{query_lower}"))
                || url.contains(&format!(".{query_lower}."));
            if domain_hit { 400 } else { 300 }
        } else if self
            .workspace_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(query_lower))
        {
            200
        } else if self.profile_name.to_lowercase().contains(query_lower) {
            150
        } else {
            0
        };

        if self.active {
            score += 50;
        }
        score
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::tab;
    use super::*;

    #[test]
    fn test_raw_tab_tolerates_missing_and_null_fields() {
        let raw: RawTab =
            serde_json::from_str(r#"{"title": null, "windowIndex": 2, "tabIndex": 3}"#).unwrap();
        assert_eq!(raw.title, None);
        assert_eq!(raw.window_index, 2);
        assert_eq!(raw.tab_index, 3);
        assert!(!raw.active);
        assert_eq!(raw.profile_name, None);
    }

    #[test]
    fn test_title_and_url_tiers() {
        let t = tab(1, 1, "GitHub", "https://github.com/");
        assert_eq!(t.score("github"), 1000);
        assert_eq!(t.score("https://github.com/"), 900);
        assert_eq!(t.score("git"), 600);
        assert_eq!(tab(1, 1, "My GitHub", "x").score("github"), 500);
        assert_eq!(tab(1, 1, "Home", "https://github.com/").score("com"), 300);
        assert_eq!(tab(1, 1, "Home", "https://github.com/").score("github"), 400);
        assert_eq!(tab(1, 1, "Home", "https://www.github.com/").score("github"), 400);
    }

    #[test]
    fn test_workspace_and_profile_fallbacks() {
        let mut t = tab(1, 1, "Home", "about:blank");
        t.workspace_name = Some("Research".to_string());
        assert_eq!(t.score("research"), 200);
        assert_eq!(t.score("personal"), 150);
        assert_eq!(t.score("zzz"), 0);
    }

    #[test]
    fn test_active_bonus_applies_to_unmatched_tabs() {
        let mut t = tab(1, 1, "Home", "about:blank");
        t.active = true;
        assert_eq!(t.score("home"), 1050);
        assert_eq!(t.score("zzz"), 50);
    }
}
