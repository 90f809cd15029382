use std::path::PathBuf;

use crate::errors::EdgeSwitchError;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Browser binary not found at '{}'. Is the browser installed?", path.display())]
    BinaryNotFound { path: PathBuf },

    #[error("Profile '{profile_dir}' not found")]
    ProfileNotFound { profile_dir: String },

    #[error("Workspace '{workspace_id}' not found")]
    WorkspaceNotFound { workspace_id: String },

    #[error("Failed to launch browser: {message}")]
    SpawnFailed { message: String },
}

impl EdgeSwitchError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::BinaryNotFound { .. } => "LAUNCH_BINARY_NOT_FOUND",
            LaunchError::ProfileNotFound { .. } => "LAUNCH_PROFILE_NOT_FOUND",
            LaunchError::WorkspaceNotFound { .. } => "LAUNCH_WORKSPACE_NOT_FOUND",
            LaunchError::SpawnFailed { .. } => "LAUNCH_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, LaunchError::SpawnFailed { .. })
    }
}
