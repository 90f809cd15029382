use std::process::ExitCode;

use clap::error::ErrorKind;

use edge_switch_core::{EXIT_FAILURE, EXIT_USAGE, init_logging};

mod app;
mod commands;

fn main() -> ExitCode {
    let matches = match app::build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    // Quiet unless -v/--verbose was given
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    match commands::run_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is::<commands::UsageError>() => {
            eprintln!("{}", e);
            ExitCode::from(EXIT_USAGE)
        }
        Err(_) => ExitCode::from(EXIT_FAILURE),
    }
}
