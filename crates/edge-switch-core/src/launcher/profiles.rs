use super::item::{AlfredItem, Modifier, ScriptFilter};
use crate::profiles::BrowserProfile;

const PROFILE_ICON: &str = "icon.png";

fn profile_item(profile: &BrowserProfile) -> AlfredItem {
    let mut subtitle = vec![format!("dir: {}", profile.dir_name)];
    if let Some(email) = profile.email.as_deref().filter(|e| !e.is_empty()) {
        subtitle.push(email.to_string());
    }

    AlfredItem::new(&profile.display_name, subtitle.join("  •  "))
        .arg(&profile.dir_name)
        .uid(format!("edge-profile-{}", profile.dir_name))
        .icon(PROFILE_ICON)
        .modifier(
            "alt",
            Modifier {
                subtitle: format!("Copy profile directory: {}", profile.dir_name),
                arg: Some(profile.dir_name.clone()),
                ..Modifier::default()
            },
        )
}

pub fn profile_items(profiles: &[&BrowserProfile], query: &str) -> ScriptFilter {
    if profiles.is_empty() {
        let subtitle = if query.is_empty() {
            "No browser profiles found".to_string()
        } else {
            format!("No profiles matching '{query}'")
        };
        return ScriptFilter::new(vec![AlfredItem::info("No profiles found", subtitle)]);
    }

    ScriptFilter::new(profiles.iter().map(|p| profile_item(p)).collect())
}
