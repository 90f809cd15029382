use serde::Serialize;

/// Title used when the window server exposes no title for a window.
pub const UNTITLED_WINDOW: &str = "(untitled window)";

/// One row of the window server's on-screen window list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWindow {
    /// Owning application name, as reported by the OS
    pub owner_name: String,
    pub pid: i32,
    /// Window-server identifier
    pub window_number: u32,
    pub title: Option<String>,
}

/// Snapshot of one browser window.
///
/// Only valid for the instant it was enumerated: window numbers must be
/// re-resolved from a fresh enumeration before every raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub pid: i32,
    pub window_number: u32,
    pub title: String,
    /// Zero-based position in the filtered window-server order. A reference
    /// index, not a rank.
    pub index: usize,
}

/// Which window to raise: the owning process and the window-server identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaiseRequest {
    pub pid: i32,
    pub window_number: u32,
}

impl RaiseRequest {
    pub fn new(pid: i32, window_number: u32) -> Self {
        Self { pid, window_number }
    }
}

impl From<&WindowRecord> for RaiseRequest {
    fn from(record: &WindowRecord) -> Self {
        Self::new(record.pid, record.window_number)
    }
}
