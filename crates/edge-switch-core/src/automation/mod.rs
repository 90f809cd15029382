//! Running AppleScript / JXA through `osascript` and checking browser presence.

pub mod errors;
pub mod osascript;
pub mod presence;
pub mod runner;

pub use errors::AutomationError;
pub use osascript::{ScriptLanguage, decode_json, run_osascript};
pub use presence::is_process_running;
pub use runner::{OsascriptRunner, ScriptRunner};
