use super::types::RawWindow;

/// Numeric error code reported by the platform accessibility API (`AXError`).
pub type PlatformErrorCode = i32;

/// Read access to the OS window server.
pub trait WindowServer {
    /// All on-screen application windows, in the order the window server
    /// reports them. `None` when the query produced no data at all.
    fn on_screen_windows(&self) -> Option<Vec<RawWindow>>;
}

/// The accessibility operations the raiser needs.
///
/// Windows are opaque handles; they are correlated with the window server
/// only through [`AccessibilityLayer::window_number`], never by position.
pub trait AccessibilityLayer {
    /// Accessibility handle for one window
    type Window;

    /// The application's accessibility windows, in whatever order the API returns.
    fn windows(&self, pid: i32) -> Result<Vec<Self::Window>, PlatformErrorCode>;

    /// Window-server identifier behind an accessibility window, if it can be resolved.
    fn window_number(&self, window: &Self::Window) -> Option<u32>;

    /// Make the process the frontmost application, ignoring other
    /// applications' claim to focus. Returns whether the OS accepted the request.
    fn activate_application(&self, pid: i32) -> bool;

    /// Perform the raise action on a single window.
    fn raise(&self, window: &Self::Window) -> Result<(), PlatformErrorCode>;
}
