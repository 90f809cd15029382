//! Raise exactly one browser window: `edge-raise-window <pid> <window_number>`.
//!
//! Exits 0 when the window was raised, 1 when it could not be, and 64 when
//! the arguments are missing or not integers. Nothing is written to stdout.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, value_parser};
use tracing::error;

use edge_switch_core::window::{
    AccessibilityLayer, RaiseRequest, SystemAccessibility, check_accessibility_permission,
    raise_window,
};
use edge_switch_core::{EXIT_FAILURE, EXIT_USAGE, init_logging};

fn build_cli() -> Command {
    Command::new("edge-raise-window")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Raise one browser window without bringing the browser's other windows forward")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pid")
                .help("Process id owning the window")
                .required(true)
                .index(1)
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("window-number")
                .help("Window-server number of the window, as printed by edge-list-windows")
                .required(true)
                .index(2)
                .value_parser(value_parser!(u32)),
        )
}

/// Parsed invocation, or the exit status to stop with.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Raise { request: RaiseRequest, verbose: bool },
    Exit(u8),
}

fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match build_cli().try_get_matches_from(args) {
        Ok(matches) => {
            let (Some(pid), Some(window_number)) = (
                matches.get_one::<i32>("pid"),
                matches.get_one::<u32>("window-number"),
            ) else {
                return Invocation::Exit(EXIT_USAGE);
            };
            Invocation::Raise {
                request: RaiseRequest::new(*pid, *window_number),
                verbose: matches.get_flag("verbose"),
            }
        }
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Invocation::Exit(0),
                _ => Invocation::Exit(EXIT_USAGE),
            }
        }
    }
}

fn run<A: AccessibilityLayer + ?Sized>(layer: &A, request: RaiseRequest) -> u8 {
    match raise_window(layer, request) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            error!(event = "cli.raise_window.failed", error = %e);
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    let (request, verbose) = match parse_args(std::env::args_os()) {
        Invocation::Raise { request, verbose } => (request, verbose),
        Invocation::Exit(code) => return ExitCode::from(code),
    };

    init_logging(!verbose);
    check_accessibility_permission();

    ExitCode::from(run(&SystemAccessibility, request))
}
