//! edge-switch-core: Core library for switching between browser profiles,
//! workspaces, tabs and windows
//!
//! Reads the browser's own metadata files, talks to the running browser
//! through the scripting bridge, and raises individual browser windows
//! through the window server. It is used by the `edge-switch` CLI and the
//! two single-purpose window helpers.
//!
//! # Main Entry Points
//!
//! - [`window`] - Enumerate browser windows and raise exactly one of them
//! - [`profiles`] - Profiles from the browser's `Local State`
//! - [`workspaces`] - Workspaces from each profile's workspace cache
//! - [`tabs`] - Open tabs, tab search and tab actions
//! - [`launch`] - Start the browser with a profile or workspace
//! - [`launcher`] - Alfred Script Filter output
//! - [`config`] - Configuration management

pub mod automation;
pub mod config;
pub mod errors;
pub mod events;
pub mod launch;
pub mod launcher;
pub mod logging;
pub mod profiles;
pub mod tabs;
pub mod window;
pub mod workspaces;

pub use config::EdgeSwitchConfig;
pub use errors::{EXIT_FAILURE, EXIT_USAGE, EdgeSwitchError, EdgeSwitchResult};
pub use launch::{LaunchError, Launcher, SystemSpawner, WorkspaceOutcome};
pub use profiles::{BrowserProfile, ProfileStore};
pub use tabs::{BrowserAutomation, BrowserTab, SwitchOutcome, TabError, TabStore};
pub use window::{
    RaiseError, RaiseRequest, SystemAccessibility, SystemWindowServer, WindowRecord,
    list_windows, raise_window,
};
pub use workspaces::{BrowserWorkspace, WorkspaceStore};

pub use logging::init_logging;
