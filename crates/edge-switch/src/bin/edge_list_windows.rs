//! Print the browser's on-screen windows as a pretty-printed JSON array.
//!
//! Takes no arguments and always exits 0; when the window server yields
//! nothing the output is `[]`.

use std::process::ExitCode;

use tracing::warn;

use edge_switch_core::window::{SystemWindowServer, list_windows, to_json};
use edge_switch_core::{EdgeSwitchConfig, init_logging};

fn main() -> ExitCode {
    init_logging(true);

    let config = EdgeSwitchConfig::load_hierarchy().unwrap_or_else(|e| {
        warn!(event = "cli.config.load_failed", error = %e);
        EdgeSwitchConfig::default()
    });

    let windows = list_windows(&SystemWindowServer, &config.browser.process_name);
    match to_json(&windows) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            warn!(event = "cli.list_windows.serialize_failed", error = %e);
            println!("[]");
        }
    }

    ExitCode::SUCCESS
}
