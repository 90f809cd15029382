//! Accessibility element to window-server identifier mapping.
//!
//! There is no public API for this. `_AXUIElementGetWindow` is a private
//! HIServices symbol that has been stable since 10.x but may change with any
//! macOS release; keep every use of it behind [`window_server_id`].

use accessibility_sys::{AXError, AXUIElementRef, kAXErrorSuccess};

// SAFETY: FFI declaration for the private _AXUIElementGetWindow from the
// ApplicationServices framework. Writes the CGWindowID of a window element.
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn _AXUIElementGetWindow(element: AXUIElementRef, window_id: *mut u32) -> AXError;
}

/// Window-server number (`CGWindowID`) of an accessibility window element.
pub(super) fn window_server_id(element: AXUIElementRef) -> Option<u32> {
    if element.is_null() {
        return None;
    }

    let mut window_id: u32 = 0;
    // SAFETY: element is a live AXUIElementRef retained by the caller;
    // window_id is a valid out pointer for the duration of the call.
    let result = unsafe { _AXUIElementGetWindow(element, &mut window_id) };

    (result == kAXErrorSuccess && window_id != 0).then_some(window_id)
}
