use super::item::{AlfredItem, Modifier, ScriptFilter};
use crate::workspaces::{BrowserWorkspace, format_time_ago};

const WORKSPACE_ICON: &str = "icons/profile.png";

fn workspace_subtitle(workspace: &BrowserWorkspace, now: f64) -> String {
    let mut parts = vec![format!("Profile: {}", workspace.profile_name)];

    match workspace.tab_count {
        0 => {}
        1 => parts.push("1 tab".to_string()),
        n => parts.push(format!("{n} tabs")),
    }

    if workspace.active {
        parts.push("Active".to_string());
    } else {
        parts.push(format_time_ago(workspace.last_active_time, now));
    }

    if workspace.shared {
        parts.push("Shared".to_string());
    }

    parts.join(" • ")
}

fn workspace_item(workspace: &BrowserWorkspace, now: f64) -> AlfredItem {
    let title = if workspace.active {
        format!("🟢 {}", workspace.name)
    } else if workspace.shared {
        format!("👥 {}", workspace.name)
    } else {
        workspace.name.clone()
    };

    AlfredItem::new(title, workspace_subtitle(workspace, now))
        .arg(format!("{}|{}", workspace.id, workspace.profile_dir))
        .uid(&workspace.id)
        .icon(WORKSPACE_ICON)
        .modifier(
            "alt",
            Modifier {
                subtitle: format!("Copy workspace ID: {}", workspace.id),
                arg: Some(workspace.id.clone()),
                valid: Some(true),
                ..Modifier::default()
            },
        )
        .modifier(
            "cmd",
            Modifier {
                subtitle: format!(
                    "Owner: {} • Color: {}",
                    if workspace.is_owner { "Yes" } else { "No" },
                    workspace.color
                ),
                valid: Some(false),
                ..Modifier::default()
            },
        )
}

/// Render workspaces, with ages relative to `now` (Unix seconds).
pub fn workspace_items(workspaces: &[&BrowserWorkspace], query: &str, now: f64) -> ScriptFilter {
    if workspaces.is_empty() {
        let item = if query.is_empty() {
            AlfredItem::info("No workspaces", "No workspaces found in any profile")
        } else {
            AlfredItem::info(
                "No workspaces found",
                format!("No workspaces matching '{query}'"),
            )
        };
        return ScriptFilter::new(vec![item]);
    }

    ScriptFilter::new(
        workspaces
            .iter()
            .map(|ws| workspace_item(ws, now))
            .collect(),
    )
}
