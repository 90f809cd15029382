use serde::Serialize;

/// A workspace of one browser profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserWorkspace {
    pub id: String,
    pub name: String,
    pub profile_dir: String,
    pub profile_name: String,
    /// Empty when the profile has no signed-in account.
    pub profile_email: String,
    pub active: bool,
    pub color: i64,
    pub tab_count: u32,
    /// Unix timestamp in seconds, `0.0` when never used.
    pub last_active_time: f64,
    pub is_owner: bool,
    pub shared: bool,
}

impl BrowserWorkspace {
    /// Relevance of this workspace for a lowercased query. Zero means no match.
    pub(crate) fn score(&self, query_lower: &str) -> u32 {
        let name = self.name.to_lowercase();
        let mut score = 0;

        if name == query_lower {
            score += 100;
        } else if name.starts_with(query_lower) {
            score += 50;
        } else if name.contains(query_lower) {
            score += 30;
        }

        if self.profile_name.to_lowercase().contains(query_lower) {
            score += 20;
        }
        if self.profile_email.to_lowercase().contains(query_lower) {
            score += 10;
        }
        if self.active {
            score += 5;
        }

        score
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::BrowserWorkspace;

    pub fn workspace(id: &str, name: &str, last_active_time: f64) -> BrowserWorkspace {
        BrowserWorkspace {
            id: id.to_string(),
            name: name.to_string(),
            profile_dir: "Default".to_string(),
            profile_name: "Personal".to_string(),
            profile_email: String::new(),
            active: false,
            color: 0,
            tab_count: 0,
            last_active_time,
            is_owner: true,
            shared: false,
        }
    }
}
