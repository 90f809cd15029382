use clap::{Arg, ArgAction, Command, value_parser};

fn query_arg() -> Arg {
    Arg::new("query")
        .help("Search terms (all tabs/workspaces/profiles when omitted)")
        .num_args(0..)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output the matching records as JSON instead of launcher items")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("edge-switch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Query and switch between browser profiles, workspaces, tabs and windows")
        .long_about("edge-switch backs a desktop launcher: it lists the browser's profiles, workspaces and open tabs as Alfred Script Filter items, and acts on them. Switching to a tab raises only the window that holds it, leaving the browser's other windows where they are.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("profiles")
                .about("List browser profiles matching a query")
                .arg(query_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("workspaces")
                .about("List workspaces of every profile, most relevant first")
                .arg(query_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("tabs")
                .about("List open tabs matching a query")
                .arg(query_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("open")
                .about("Open a browser window for a profile")
                .arg(
                    Arg::new("profile")
                        .help("Profile directory name (e.g. 'Default', 'Profile 1')")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("url")
                        .help("URL to open in the new window")
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("open-workspace")
                .about("Show a workspace, raising its window when it is already open")
                .arg(
                    Arg::new("workspace")
                        .help("Workspace reference as '<workspace_id>|<profile_dir>'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("switch-tab")
                .about("Bring a tab to the front, raising only its window")
                .arg(
                    Arg::new("tab")
                        .help("Tab reference as '<window_index>:<tab_index>' (1-based)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("close-tab")
                .about("Close a tab")
                .arg(
                    Arg::new("tab")
                        .help("Tab reference as '<window_index>:<tab_index>' (1-based)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("copy-url")
                .about("Copy a URL to the clipboard")
                .arg(
                    Arg::new("url")
                        .help("URL to copy")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("windows")
                .about("Print the browser's on-screen windows as JSON"),
        )
        .subcommand(
            Command::new("raise")
                .about("Raise one browser window by process id and window number")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("pid")
                        .help("Owning process id")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("window-number")
                        .help("Window-server window number")
                        .required(true)
                        .index(2)
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(clap_complete::Shell)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "edge-switch");
        app.debug_assert();
    }

    #[test]
    fn test_cli_tabs_query_collects_words() {
        let matches = build_cli()
            .try_get_matches_from(vec!["edge-switch", "tabs", "rust", "book", "--json"])
            .unwrap();
        let tabs = matches.subcommand_matches("tabs").unwrap();
        let words: Vec<&String> = tabs.get_many::<String>("query").unwrap().collect();
        assert_eq!(words, vec!["rust", "book"]);
        assert!(tabs.get_flag("json"));
    }

    #[test]
    fn test_cli_json_flag_before_query() {
        let matches = build_cli()
            .try_get_matches_from(vec!["edge-switch", "workspaces", "--json", "trip"])
            .unwrap();
        let workspaces = matches.subcommand_matches("workspaces").unwrap();
        assert!(workspaces.get_flag("json"));
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["edge-switch", "profiles", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_raise_parses_numbers() {
        let matches = build_cli()
            .try_get_matches_from(vec!["edge-switch", "raise", "57622", "203368"])
            .unwrap();
        let raise = matches.subcommand_matches("raise").unwrap();
        assert_eq!(*raise.get_one::<i32>("pid").unwrap(), 57622);
        assert_eq!(*raise.get_one::<u32>("window-number").unwrap(), 203368);
    }

    #[test]
    fn test_cli_raise_rejects_non_numeric() {
        let result = build_cli().try_get_matches_from(vec!["edge-switch", "raise", "abc", "1"]);
        assert!(result.is_err());

        let result = build_cli().try_get_matches_from(vec!["edge-switch", "raise", "1", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_open_with_optional_url() {
        let matches = build_cli()
            .try_get_matches_from(vec!["edge-switch", "open", "Profile 1", "https://example.com"])
            .unwrap();
        let open = matches.subcommand_matches("open").unwrap();
        assert_eq!(open.get_one::<String>("profile").unwrap(), "Profile 1");
        assert_eq!(open.get_one::<String>("url").unwrap(), "https://example.com");
    }
}
