//! Browser workspaces, read from each profile's workspace cache.

pub mod store;
pub mod time_ago;
pub mod types;

pub use store::{WorkspaceStore, parse_workspaces_cache};
pub use time_ago::{format_time_ago, unix_now};
pub use types::BrowserWorkspace;
