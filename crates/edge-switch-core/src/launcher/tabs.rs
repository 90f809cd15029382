use super::item::{AlfredItem, Modifier, ScriptFilter};
use super::WORKFLOW_ICON;
use crate::tabs::BrowserTab;

/// Tabs listed before the remainder is summarised in one row.
pub const MAX_TAB_ITEMS: usize = 50;

const URL_DISPLAY_LIMIT: usize = 50;

fn truncate_url(url: &str) -> String {
    if url.chars().count() > URL_DISPLAY_LIMIT {
        let head: String = url.chars().take(URL_DISPLAY_LIMIT - 3).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}

fn tab_item(tab: &BrowserTab) -> AlfredItem {
    let title = if tab.active {
        format!("{} ⭐", tab.title)
    } else {
        tab.title.clone()
    };

    let mut subtitle = vec![tab.profile_name.clone()];
    if let Some(workspace) = &tab.workspace_name {
        let shared = if tab.workspace_shared { " 👥" } else { "" };
        subtitle.push(format!("📂 {workspace}{shared}"));
    }
    subtitle.push(truncate_url(&tab.url));

    let arg = format!("{}:{}", tab.window_index, tab.tab_index);

    AlfredItem::new(title, subtitle.join(" | "))
        .arg(&arg)
        .uid(format!("tab_{}_{}", tab.window_id, tab.tab_index))
        .icon(WORKFLOW_ICON)
        .variable("window_index", tab.window_index.to_string())
        .variable("tab_index", tab.tab_index.to_string())
        .variable("profile_dir", &tab.profile_dir)
        .variable("workspace_id", tab.workspace_id.clone().unwrap_or_default())
        .modifier(
            "cmd",
            Modifier {
                subtitle: format!("Copy URL: {}", tab.url),
                arg: Some(tab.url.clone()),
                variables: [("action".to_string(), "copy_url".to_string())].into(),
                ..Modifier::default()
            },
        )
        .modifier(
            "alt",
            Modifier {
                subtitle: "Close this tab".to_string(),
                arg: Some(arg),
                variables: [("action".to_string(), "close_tab".to_string())].into(),
                ..Modifier::default()
            },
        )
}

/// `browser_name` is the configured process name, used in the empty-result hint.
pub fn tab_items(tabs: &[&BrowserTab], query: &str, browser_name: &str) -> ScriptFilter {
    if tabs.is_empty() {
        let title = if query.is_empty() {
            format!("No open {browser_name} tabs found")
        } else {
            format!("No tabs matching '{query}'")
        };
        return ScriptFilter::new(vec![AlfredItem::info(
            title,
            format!("Make sure {browser_name} is running with open tabs"),
        )]);
    }

    let mut items: Vec<AlfredItem> = tabs
        .iter()
        .take(MAX_TAB_ITEMS)
        .map(|tab| tab_item(tab))
        .collect();

    if tabs.len() > MAX_TAB_ITEMS {
        items.push(AlfredItem::info(
            format!("... and {} more tabs", tabs.len() - MAX_TAB_ITEMS),
            "Refine your search to see more specific results",
        ));
    }

    ScriptFilter::new(items)
}
