use clap::ArgMatches;
use tracing::{error, info};

use edge_switch_core::events;
use edge_switch_core::window::{
    RaiseRequest, SystemAccessibility, SystemWindowServer, check_accessibility_permission,
    list_windows, raise_window, to_json,
};

use super::helpers::load_config_with_warning;

pub(crate) fn handle_windows_command() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let windows = list_windows(&SystemWindowServer, &config.browser.process_name);
    println!("{}", to_json(&windows)?);
    Ok(())
}

pub(crate) fn handle_raise_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let pid = *matches
        .get_one::<i32>("pid")
        .ok_or("PID argument is required")?;
    let window_number = *matches
        .get_one::<u32>("window-number")
        .ok_or("Window number argument is required")?;

    info!(
        event = "cli.raise_started",
        pid = pid,
        window_number = window_number
    );
    check_accessibility_permission();

    match raise_window(&SystemAccessibility, RaiseRequest::new(pid, window_number)) {
        Ok(()) => {
            info!(event = "cli.raise_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.raise_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
