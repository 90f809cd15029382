use tracing::warn;

use super::native::is_accessibility_trusted;

/// Warn when this process lacks the Accessibility permission. Raising still
/// proceeds and fails with `TargetUnavailable`.
pub fn check_accessibility_permission() -> bool {
    let trusted = is_accessibility_trusted();
    if !trusted {
        warn!(
            event = "core.window.accessibility_untrusted",
            message = "Grant Accessibility access in System Settings > Privacy & Security"
        );
    }
    trusted
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn test_untrusted_off_macos() {
        assert!(!check_accessibility_permission());
    }
}
