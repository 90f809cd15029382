use std::ptr;

use accessibility_sys::{
    AXUIElementCopyAttributeValue, AXUIElementCreateApplication, AXUIElementPerformAction,
    AXUIElementRef, AXUIElementSetMessagingTimeout, kAXErrorFailure, kAXErrorNoValue,
    kAXErrorSuccess, kAXRaiseAction, kAXWindowsAttribute,
};
use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_foundation::dictionary::CFDictionary;
use core_foundation::number::CFNumber;
use core_foundation::string::CFString;
use core_graphics::window::{
    copy_window_info, kCGNullWindowID, kCGWindowListExcludeDesktopElements,
    kCGWindowListOptionOnScreenOnly,
};
use objc2::rc::Retained;
use objc2::{ClassType, msg_send};
use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication};
use tracing::debug;

use super::window_id::window_server_id;
use crate::window::traits::{AccessibilityLayer, PlatformErrorCode, WindowServer};
use crate::window::types::RawWindow;

// SAFETY: FFI declaration for AXIsProcessTrusted from macOS ApplicationServices framework.
// Returns false when the process lacks accessibility permissions (does not crash).
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
}

/// Timeout for AX messaging (seconds). The accessibility API has no deadline
/// of its own; a hung target would otherwise block the raise forever.
const AX_MESSAGING_TIMEOUT: f32 = 1.0;

/// Normal application windows live on layer 0; menu bar extras, the Dock and
/// overlays sit on other layers.
const NORMAL_WINDOW_LAYER: i64 = 0;

/// Whether this process may drive other applications through accessibility.
pub fn is_accessibility_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// CoreGraphics window list (`CGWindowListCopyWindowInfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWindowServer;

impl WindowServer for SystemWindowServer {
    fn on_screen_windows(&self) -> Option<Vec<RawWindow>> {
        let options = kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements;
        let list = copy_window_info(options, kCGNullWindowID)?;

        // SAFETY: every element of the window info array is a CFDictionary
        // keyed by CFString. wrap_under_get_rule retains, `list` keeps its own reference.
        let dicts: CFArray<CFDictionary<CFString, CFType>> =
            unsafe { CFArray::wrap_under_get_rule(list.as_concrete_TypeRef()) };

        let keys = WindowInfoKeys::new();
        let mut skipped = 0usize;
        let windows: Vec<RawWindow> = dicts
            .iter()
            .filter_map(|dict| {
                let window = parse_window_info(&dict, &keys);
                if window.is_none() {
                    skipped += 1;
                }
                window
            })
            .collect();

        debug!(
            event = "core.window.native.window_list_read",
            count = windows.len(),
            skipped = skipped
        );
        Some(windows)
    }
}

struct WindowInfoKeys {
    owner_name: CFString,
    owner_pid: CFString,
    number: CFString,
    name: CFString,
    layer: CFString,
}

impl WindowInfoKeys {
    fn new() -> Self {
        Self {
            owner_name: CFString::new("kCGWindowOwnerName"),
            owner_pid: CFString::new("kCGWindowOwnerPID"),
            number: CFString::new("kCGWindowNumber"),
            name: CFString::new("kCGWindowName"),
            layer: CFString::new("kCGWindowLayer"),
        }
    }
}

/// Read one window info dictionary. Rows without an owner, pid or number,
/// and rows outside the normal window layer, are dropped.
fn parse_window_info(
    dict: &CFDictionary<CFString, CFType>,
    keys: &WindowInfoKeys,
) -> Option<RawWindow> {
    let number_value = |key: &CFString| {
        dict.find(key)
            .and_then(|value| value.downcast::<CFNumber>())
            .and_then(|number| number.to_i64())
    };
    let string_value = |key: &CFString| {
        dict.find(key)
            .and_then(|value| value.downcast::<CFString>())
            .map(|s| s.to_string())
    };

    if let Some(layer) = number_value(&keys.layer)
        && layer != NORMAL_WINDOW_LAYER
    {
        return None;
    }

    let owner_name = string_value(&keys.owner_name)?;
    let pid = i32::try_from(number_value(&keys.owner_pid)?).ok()?;
    let window_number = u32::try_from(number_value(&keys.number)?).ok()?;

    Some(RawWindow {
        owner_name,
        pid,
        window_number,
        title: string_value(&keys.name),
    })
}

/// A retained accessibility window element.
#[derive(Debug, Clone)]
pub struct AxWindow {
    element: CFType,
}

impl AxWindow {
    fn as_element(&self) -> AXUIElementRef {
        self.element.as_CFTypeRef() as AXUIElementRef
    }
}

/// Accessibility API (`AXUIElement`) plus AppKit activation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAccessibility;

impl AccessibilityLayer for SystemAccessibility {
    type Window = AxWindow;

    fn windows(&self, pid: i32) -> Result<Vec<AxWindow>, PlatformErrorCode> {
        // SAFETY: AXUIElementCreateApplication creates a +1 retained AXUIElementRef.
        let app_element = unsafe { AXUIElementCreateApplication(pid) };
        if app_element.is_null() {
            return Err(kAXErrorFailure);
        }
        // SAFETY: Create Rule, we own the reference; CFType releases it on drop.
        let app = unsafe { CFType::wrap_under_create_rule(app_element as CFTypeRef) };

        // SAFETY: app_element is a valid AXUIElementRef kept alive by `app`.
        unsafe {
            AXUIElementSetMessagingTimeout(app_element, AX_MESSAGING_TIMEOUT);
        }

        let cf_windows_attr = CFString::new(kAXWindowsAttribute);
        let mut windows_value: CFTypeRef = ptr::null();

        // SAFETY: Standard AXUIElementCopyAttributeValue call (Copy Rule: +1 retained ref).
        let result = unsafe {
            AXUIElementCopyAttributeValue(
                app_element,
                cf_windows_attr.as_concrete_TypeRef(),
                &mut windows_value,
            )
        };
        drop(app);

        if result != kAXErrorSuccess {
            return Err(result);
        }
        if windows_value.is_null() {
            return Err(kAXErrorNoValue);
        }

        // SAFETY: windows_value is a +1 retained CFArrayRef from CopyAttributeValue.
        // wrap_under_create_rule takes ownership and releases it when dropped.
        let cf_array: CFArray<CFType> =
            unsafe { CFArray::wrap_under_create_rule(windows_value as CFArrayRef) };

        // Each handle keeps its own retain so it outlives the array.
        Ok(cf_array
            .iter()
            .map(|item| AxWindow {
                element: CFType::clone(&item),
            })
            .collect())
    }

    fn window_number(&self, window: &AxWindow) -> Option<u32> {
        window_server_id(window.as_element())
    }

    #[allow(deprecated)]
    fn activate_application(&self, pid: i32) -> bool {
        // SAFETY: class method returning an autoreleased NSRunningApplication or nil.
        let app: Option<Retained<NSRunningApplication>> = unsafe {
            msg_send![
                NSRunningApplication::class(),
                runningApplicationWithProcessIdentifier: pid
            ]
        };
        let Some(app) = app else {
            debug!(event = "core.window.native.activate_no_app", pid = pid);
            return false;
        };

        // ActivateIgnoringOtherApps is deprecated from macOS 14 but still the
        // only option that forces activation from a background process.
        // SAFETY: activateWithOptions: takes a plain options bitmask.
        unsafe {
            msg_send![
                &*app,
                activateWithOptions: NSApplicationActivationOptions::ActivateIgnoringOtherApps
            ]
        }
    }

    fn raise(&self, window: &AxWindow) -> Result<(), PlatformErrorCode> {
        let cf_action = CFString::new(kAXRaiseAction);

        // SAFETY: Performing an action on a window element retained by `window`.
        let result =
            unsafe { AXUIElementPerformAction(window.as_element(), cf_action.as_concrete_TypeRef()) };

        if result == kAXErrorSuccess {
            Ok(())
        } else {
            Err(result)
        }
    }
}
