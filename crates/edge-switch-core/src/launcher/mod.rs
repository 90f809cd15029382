//! Alfred Script Filter output for profiles, workspaces and tabs.
//!
//! Each renderer returns a [`ScriptFilter`]; empty results render a single
//! invalid item explaining why nothing is listed. Item `arg`s use the
//! encodings the `edge-switch` subcommands accept: `<dir>` for profiles,
//! `<workspace_id>|<profile_dir>` for workspaces and `<window>:<tab>` for
//! tabs.

pub mod item;
pub mod profiles;
pub mod tabs;
pub mod workspaces;

pub use item::{AlfredItem, Icon, Modifier, ScriptFilter};
pub use profiles::profile_items;
pub use tabs::{MAX_TAB_ITEMS, tab_items};
pub use workspaces::workspace_items;

/// Workflow icon shown on informational items.
pub const WORKFLOW_ICON: &str = "icons/edge-alfred.png";
