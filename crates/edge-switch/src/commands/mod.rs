use std::fmt;

use clap::ArgMatches;

use edge_switch_core::events;

pub mod helpers;

mod completions;
mod profiles;
mod tabs;
mod windows;
mod workspaces;

/// Malformed command-line input, reported with `EX_USAGE`.
#[derive(Debug)]
pub struct UsageError {
    message: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UsageError {}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("profiles", sub_matches)) => profiles::handle_profiles_command(sub_matches),
        Some(("open", sub_matches)) => profiles::handle_open_command(sub_matches),
        Some(("workspaces", sub_matches)) => workspaces::handle_workspaces_command(sub_matches),
        Some(("open-workspace", sub_matches)) => {
            workspaces::handle_open_workspace_command(sub_matches)
        }
        Some(("tabs", sub_matches)) => tabs::handle_tabs_command(sub_matches),
        Some(("switch-tab", sub_matches)) => tabs::handle_switch_tab_command(sub_matches),
        Some(("close-tab", sub_matches)) => tabs::handle_close_tab_command(sub_matches),
        Some(("copy-url", sub_matches)) => tabs::handle_copy_url_command(sub_matches),
        Some(("windows", _)) => windows::handle_windows_command(),
        Some(("raise", sub_matches)) => windows::handle_raise_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => Err(Box::new(UsageError::new("Unknown command"))),
    }
}
