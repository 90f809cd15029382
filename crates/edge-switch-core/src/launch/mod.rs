//! Starting the browser with a profile or a workspace.

pub mod errors;
pub mod handler;
pub mod spawner;

pub use errors::LaunchError;
pub use handler::{Launcher, WorkspaceOutcome, profile_args, workspace_args};
pub use spawner::{ProcessSpawner, SystemSpawner};
