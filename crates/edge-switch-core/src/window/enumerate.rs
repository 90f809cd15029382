use tracing::{debug, info, warn};

use super::traits::WindowServer;
use super::types::{RawWindow, UNTITLED_WINDOW, WindowRecord};

/// List the on-screen windows owned by `owner_name`.
///
/// The owner match is exact and case-sensitive. Records keep the window
/// server's order and are indexed from 0 in that order. A failed window
/// server query yields an empty list, not an error.
pub fn list_windows<S>(server: &S, owner_name: &str) -> Vec<WindowRecord>
where
    S: WindowServer + ?Sized,
{
    info!(event = "core.window.list_started", owner = owner_name);

    let Some(raw_windows) = server.on_screen_windows() else {
        warn!(
            event = "core.window.list_query_failed",
            owner = owner_name,
            message = "Window server returned no window list"
        );
        return Vec::new();
    };

    let total = raw_windows.len();
    let records: Vec<WindowRecord> = raw_windows
        .into_iter()
        .filter(|w| w.owner_name == owner_name)
        .enumerate()
        .map(|(index, w)| to_record(index, w))
        .collect();

    debug!(
        event = "core.window.list_filtered",
        owner = owner_name,
        total = total,
        matched = records.len()
    );
    info!(event = "core.window.list_completed", count = records.len());
    records
}

fn to_record(index: usize, window: RawWindow) -> WindowRecord {
    let title = window
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED_WINDOW.to_string());

    WindowRecord {
        pid: window.pid,
        window_number: window.window_number,
        title,
        index,
    }
}

/// Pretty-printed JSON array of records; `[]` when empty.
pub fn to_json(records: &[WindowRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
