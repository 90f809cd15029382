use tracing::{error, info, warn};

use crate::errors::EdgeSwitchError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log a failed command. User errors (unknown profile, tab out of range)
/// are warnings; everything else is an error.
pub fn log_app_error(error: &dyn EdgeSwitchError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;
    use crate::launch::LaunchError;

    #[test]
    fn test_app_events() {
        log_app_startup();

        log_app_error(&ConfigError::from(std::io::Error::other("test")));
        log_app_error(&LaunchError::ProfileNotFound {
            profile_dir: "Profile 9".to_string(),
        });
    }
}
