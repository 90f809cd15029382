use crate::window::traits::{AccessibilityLayer, PlatformErrorCode, WindowServer};
use crate::window::types::RawWindow;

/// `kAXErrorCannotComplete`, reported for every target on unsupported platforms.
const CANNOT_COMPLETE: PlatformErrorCode = -25204;

/// Window server stand-in: the query never yields data.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWindowServer;

impl WindowServer for SystemWindowServer {
    fn on_screen_windows(&self) -> Option<Vec<RawWindow>> {
        None
    }
}

/// Accessibility stand-in: no process exposes windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAccessibility;

impl AccessibilityLayer for SystemAccessibility {
    type Window = ();

    fn windows(&self, _pid: i32) -> Result<Vec<Self::Window>, PlatformErrorCode> {
        Err(CANNOT_COMPLETE)
    }

    fn window_number(&self, _window: &Self::Window) -> Option<u32> {
        None
    }

    fn activate_application(&self, _pid: i32) -> bool {
        false
    }

    fn raise(&self, _window: &Self::Window) -> Result<(), PlatformErrorCode> {
        Err(CANNOT_COMPLETE)
    }
}

pub fn is_accessibility_trusted() -> bool {
    false
}
