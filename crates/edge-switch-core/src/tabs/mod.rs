//! Open browser tabs: listing through the scripting bridge, correlation with
//! profiles and workspaces, search, and per-tab actions.

pub mod actions;
pub mod errors;
pub mod scripts;
pub mod source;
pub mod store;
pub mod types;

pub use actions::{SwitchOutcome, copy_url};
pub use errors::TabError;
pub use source::{BrowserAutomation, TabSource};
pub use store::{TabStore, correlate_tabs};
pub use types::{BrowserTab, RawTab};
