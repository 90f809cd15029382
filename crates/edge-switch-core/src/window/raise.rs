use tracing::{debug, info, warn};

use super::errors::RaiseError;
use super::traits::AccessibilityLayer;
use super::types::RaiseRequest;

/// Raise one window above every other window, system-wide.
///
/// Scans the application's accessibility windows for the one whose
/// window-server number matches the request. On a match the application is
/// activated and the window raised immediately afterwards; the window server
/// ignores a raise for an application that is not frontmost, so the order of
/// these two calls is fixed and nothing may run between them. The first
/// match ends the scan whatever the raise outcome.
///
/// # Errors
///
/// - [`RaiseError::TargetUnavailable`] when the window list cannot be read
/// - [`RaiseError::TargetNotFound`] when no window carries the number
/// - [`RaiseError::ActionRejected`] when the platform refuses the raise
pub fn raise_window<A>(layer: &A, request: RaiseRequest) -> Result<(), RaiseError>
where
    A: AccessibilityLayer + ?Sized,
{
    let RaiseRequest { pid, window_number } = request;
    info!(
        event = "core.window.raise_started",
        pid = pid,
        window_number = window_number
    );

    let windows = layer.windows(pid).map_err(|code| {
        warn!(
            event = "core.window.raise_windows_unavailable",
            pid = pid,
            code = code
        );
        RaiseError::TargetUnavailable { pid, code }
    })?;

    let mut unresolved = 0usize;
    for window in &windows {
        let Some(number) = layer.window_number(window) else {
            unresolved += 1;
            continue;
        };
        if number != window_number {
            continue;
        }

        if !layer.activate_application(pid) {
            warn!(
                event = "core.window.raise_activate_refused",
                pid = pid,
                message = "Application activation was refused; raising anyway"
            );
        }
        return match layer.raise(window) {
            Ok(()) => {
                info!(
                    event = "core.window.raise_completed",
                    pid = pid,
                    window_number = window_number
                );
                Ok(())
            }
            Err(code) => {
                warn!(
                    event = "core.window.raise_rejected",
                    pid = pid,
                    window_number = window_number,
                    code = code
                );
                Err(RaiseError::ActionRejected {
                    pid,
                    window_number,
                    code,
                })
            }
        };
    }

    debug!(
        event = "core.window.raise_no_match",
        pid = pid,
        window_number = window_number,
        checked = windows.len(),
        unresolved = unresolved
    );
    Err(RaiseError::TargetNotFound { pid, window_number })
}
