//! Browser window enumeration and single-window raising.
//!
//! Two one-shot operations:
//!
//! - [`list_windows`] snapshots the on-screen windows owned by the browser
//!   process, in window-server order.
//! - [`raise_window`] brings exactly one of those windows to the front,
//!   leaving the browser's other windows where they were.
//!
//! Both talk to the OS through the [`WindowServer`] and
//! [`AccessibilityLayer`] seams; [`native`] provides the real
//! implementations.

pub mod enumerate;
pub mod errors;
pub mod native;
pub mod permission;
pub mod raise;
pub mod traits;
pub mod types;

pub use enumerate::{list_windows, to_json};
pub use errors::RaiseError;
pub use native::{SystemAccessibility, SystemWindowServer, is_accessibility_trusted};
pub use permission::check_accessibility_permission;
pub use raise::raise_window;
pub use traits::{AccessibilityLayer, PlatformErrorCode, WindowServer};
pub use types::{RaiseRequest, RawWindow, UNTITLED_WINDOW, WindowRecord};
