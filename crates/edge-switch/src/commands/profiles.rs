use clap::ArgMatches;
use tracing::{error, info};

use edge_switch_core::events;
use edge_switch_core::launcher::profile_items;
use edge_switch_core::{BrowserAutomation, Launcher, ProfileStore, SystemSpawner};

use super::helpers::{load_config_with_warning, query_from};

pub(crate) fn handle_profiles_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = query_from(matches);
    let json_output = matches.get_flag("json");
    info!(
        event = "cli.profiles_started",
        query = %query,
        json_output = json_output
    );

    let config = load_config_with_warning();
    let mut store = ProfileStore::from_config(&config.browser);
    store.load();
    let profiles = store.search(&query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else {
        println!("{}", profile_items(&profiles, &query).to_json()?);
    }

    info!(event = "cli.profiles_completed", count = profiles.len());
    Ok(())
}

pub(crate) fn handle_open_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let profile_dir = matches
        .get_one::<String>("profile")
        .ok_or("Profile argument is required")?;
    let url = matches.get_one::<String>("url").map(String::as_str);

    info!(event = "cli.open_started", profile_dir = %profile_dir);

    let config = load_config_with_warning();
    let mut profiles = ProfileStore::from_config(&config.browser);
    profiles.load();

    let automation = BrowserAutomation::from_config(&config);
    let launcher = Launcher {
        browser: &config.browser,
        spawner: &SystemSpawner,
        automation: &automation,
    };

    match launcher.open_profile(&profiles, profile_dir, url) {
        Ok(()) => {
            info!(event = "cli.open_completed", profile_dir = %profile_dir);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to open profile '{}': {}", profile_dir, e);
            error!(
                event = "cli.open_failed",
                profile_dir = %profile_dir,
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
