//! OS-backed implementations of the window seams.
//!
//! On macOS the window server is read with CoreGraphics and windows are
//! raised through the Accessibility API. Elsewhere the window list is
//! always unavailable, so enumeration is empty and every raise fails with
//! `TargetUnavailable`.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(target_os = "macos"))]
mod unsupported;
#[cfg(target_os = "macos")]
mod window_id;

#[cfg(target_os = "macos")]
pub use macos::{AxWindow, SystemAccessibility, SystemWindowServer, is_accessibility_trusted};
#[cfg(not(target_os = "macos"))]
pub use unsupported::{SystemAccessibility, SystemWindowServer, is_accessibility_trusted};
