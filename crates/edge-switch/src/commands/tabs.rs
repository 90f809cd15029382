use clap::ArgMatches;
use tracing::{error, info, warn};

use edge_switch_core::events;
use edge_switch_core::launcher::{AlfredItem, ScriptFilter, tab_items};
use edge_switch_core::tabs::copy_url;
use edge_switch_core::window::{
    SystemAccessibility, SystemWindowServer, check_accessibility_permission,
};
use edge_switch_core::{
    BrowserAutomation, EdgeSwitchError, ProfileStore, SwitchOutcome, TabStore, WorkspaceStore,
};

use super::helpers::{load_config_with_warning, parse_tab_ref, query_from};

pub(crate) fn handle_tabs_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let query = query_from(matches);
    let json_output = matches.get_flag("json");
    info!(
        event = "cli.tabs_started",
        query = %query,
        json_output = json_output
    );

    let config = load_config_with_warning();
    let mut profiles = ProfileStore::from_config(&config.browser);
    profiles.load();
    let workspaces = WorkspaceStore::load(&config.browser, profiles.all());
    let automation = BrowserAutomation::from_config(&config);

    let store = match TabStore::load(&automation, profiles.all(), workspaces.all()) {
        Ok(store) => store,
        Err(e) => {
            error!(
                event = "cli.tabs_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            if json_output {
                eprintln!("❌ Failed to list tabs: {}", e);
                return Err(e.into());
            }
            let item = AlfredItem::info("Error loading tabs", e.to_string());
            println!("{}", ScriptFilter::new(vec![item]).to_json()?);
            return Ok(());
        }
    };

    let tabs = store.search(&query);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&tabs)?);
    } else {
        println!("{}", tab_items(&tabs, &query, &config.browser.process_name).to_json()?);
    }

    info!(event = "cli.tabs_completed", count = tabs.len());
    Ok(())
}

pub(crate) fn handle_switch_tab_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let reference = matches
        .get_one::<String>("tab")
        .ok_or("Tab argument is required")?;
    let (window_index, tab_index) = parse_tab_ref(reference)?;

    info!(
        event = "cli.switch_tab_started",
        window_index = window_index,
        tab_index = tab_index
    );

    let config = load_config_with_warning();
    let automation = BrowserAutomation::from_config(&config);
    check_accessibility_permission();

    match automation.switch_to_tab(
        &SystemWindowServer,
        &SystemAccessibility,
        window_index,
        tab_index,
    ) {
        Ok(outcome) => {
            if outcome == SwitchOutcome::Activated {
                warn!(
                    event = "cli.switch_tab_activated_all",
                    message = "Target window could not be raised alone"
                );
            }
            info!(
                event = "cli.switch_tab_completed",
                window_index = window_index,
                tab_index = tab_index
            );
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "❌ Failed to switch to tab {} in window {}: {}",
                tab_index, window_index, e
            );
            error!(
                event = "cli.switch_tab_failed",
                window_index = window_index,
                tab_index = tab_index,
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn handle_close_tab_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let reference = matches
        .get_one::<String>("tab")
        .ok_or("Tab argument is required")?;
    let (window_index, tab_index) = parse_tab_ref(reference)?;

    info!(
        event = "cli.close_tab_started",
        window_index = window_index,
        tab_index = tab_index
    );

    let config = load_config_with_warning();
    let automation = BrowserAutomation::from_config(&config);

    match automation.close_tab(window_index, tab_index) {
        Ok(()) => {
            info!(event = "cli.close_tab_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "❌ Failed to close tab {} in window {}: {}",
                tab_index, window_index, e
            );
            error!(
                event = "cli.close_tab_failed",
                window_index = window_index,
                tab_index = tab_index,
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn handle_copy_url_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = matches
        .get_one::<String>("url")
        .ok_or("URL argument is required")?;

    info!(event = "cli.copy_url_started");

    match copy_url(url) {
        Ok(()) => {
            info!(event = "cli.copy_url_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to copy URL: {}", e);
            error!(event = "cli.copy_url_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
