use clap::ArgMatches;
use tracing::{error, info};

use edge_switch_core::events;
use edge_switch_core::launcher::workspace_items;
use edge_switch_core::window::{SystemAccessibility, SystemWindowServer};
use edge_switch_core::workspaces::unix_now;
use edge_switch_core::{
    BrowserAutomation, Launcher, ProfileStore, SystemSpawner, WorkspaceOutcome, WorkspaceStore,
};

use super::helpers::{load_config_with_warning, parse_workspace_ref, query_from};

pub(crate) fn handle_workspaces_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = query_from(matches);
    let json_output = matches.get_flag("json");
    info!(
        event = "cli.workspaces_started",
        query = %query,
        json_output = json_output
    );

    let config = load_config_with_warning();
    let mut profiles = ProfileStore::from_config(&config.browser);
    profiles.load();
    let store = WorkspaceStore::load(&config.browser, profiles.all());
    let workspaces = store.search(&query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&workspaces)?);
    } else {
        println!(
            "{}",
            workspace_items(&workspaces, &query, unix_now()).to_json()?
        );
    }

    info!(event = "cli.workspaces_completed", count = workspaces.len());
    Ok(())
}

pub(crate) fn handle_open_workspace_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let reference = matches
        .get_one::<String>("workspace")
        .ok_or("Workspace argument is required")?;
    let (workspace_id, profile_dir) = parse_workspace_ref(reference)?;

    info!(
        event = "cli.open_workspace_started",
        workspace_id = %workspace_id,
        profile_dir = %profile_dir
    );

    let config = load_config_with_warning();
    let mut profiles = ProfileStore::from_config(&config.browser);
    profiles.load();
    let workspaces = WorkspaceStore::load(&config.browser, profiles.all());

    let automation = BrowserAutomation::from_config(&config);
    let launcher = Launcher {
        browser: &config.browser,
        spawner: &SystemSpawner,
        automation: &automation,
    };

    match launcher.open_workspace(
        &SystemWindowServer,
        &SystemAccessibility,
        &workspaces,
        &workspace_id,
        &profile_dir,
    ) {
        Ok(outcome) => {
            info!(
                event = "cli.open_workspace_completed",
                workspace_id = %workspace_id,
                raised = outcome == WorkspaceOutcome::Raised
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to open workspace '{}': {}", workspace_id, e);
            error!(
                event = "cli.open_workspace_failed",
                workspace_id = %workspace_id,
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
