//! Integration tests for edge-switch CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! Every command runs against a temporary home and user data directory so the
//! developer's own browser state is never read.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const LOCAL_STATE: &str = r#"{
  "profile": {
    "info_cache": {
      "Default": {
        "name": "Personal",
        "user_name": "me@home.example",
        "avatar_icon": "chrome://theme/IDR_PROFILE_AVATAR_26"
      },
      "Profile 1": {
        "name": "Work",
        "user_name": "me@work.example"
      },
      "Profile 2": {
        "name": "Hidden",
        "is_omitted_from_ui": true
      }
    }
  }
}"#;

struct Fixture {
    home: TempDir,
    user_data: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let home = TempDir::new().expect("temp home");
        let user_data = TempDir::new().expect("temp user data dir");
        fs::write(user_data.path().join("Local State"), LOCAL_STATE).expect("write Local State");
        Self { home, user_data }
    }

    fn run(&self, args: &[&str]) -> Output {
        edge_switch(self.home.path(), self.user_data.path(), args)
    }
}

fn edge_switch(home: &Path, user_data: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edge-switch"))
        .args(args)
        .env("HOME", home)
        .env("EDGE_USER_DATA_DIR", user_data)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute 'edge-switch'")
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} failed with exit code {:?}. stderr: {}",
        what,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_profiles_json_lists_visible_profiles() {
    let fixture = Fixture::new();
    let output = fixture.run(&["profiles", "--json"]);
    assert_success(&output, "edge-switch profiles --json");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let profiles: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let profiles = profiles.as_array().expect("output should be an array");

    let dirs: Vec<&str> = profiles
        .iter()
        .filter_map(|p| p["dir_name"].as_str())
        .collect();
    assert_eq!(dirs, vec!["Default", "Profile 1"]);
    assert_eq!(profiles[1]["display_name"], "Work");
    assert_eq!(profiles[1]["email"], "me@work.example");
}

#[test]
fn test_profiles_script_filter_output() {
    let fixture = Fixture::new();
    let output = fixture.run(&["profiles", "work"]);
    assert_success(&output, "edge-switch profiles work");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let filter: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let items = filter["items"].as_array().expect("items should be an array");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Work");
    assert_eq!(items[0]["arg"], "Profile 1");
    assert_eq!(items[0]["uid"], "edge-profile-Profile 1");
}

#[test]
fn test_profiles_without_match_renders_info_item() {
    let fixture = Fixture::new();
    let output = fixture.run(&["profiles", "nothing-matches-this"]);
    assert_success(&output, "edge-switch profiles nothing-matches-this");

    let filter: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let items = filter["items"].as_array().expect("items should be an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["valid"], false);
}

#[test]
fn test_missing_local_state_is_an_empty_list() {
    let home = TempDir::new().expect("temp home");
    let empty = TempDir::new().expect("temp user data dir");
    let output = edge_switch(home.path(), empty.path(), &["profiles", "--json"]);
    assert_success(&output, "edge-switch profiles --json");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_workspaces_json_without_cache_is_empty() {
    let fixture = Fixture::new();
    let output = fixture.run(&["workspaces", "--json"]);
    assert_success(&output, "edge-switch workspaces --json");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_workspaces_json_reads_profile_cache() {
    let fixture = Fixture::new();
    let profile_dir = fixture.user_data.path().join("Profile 1");
    fs::create_dir_all(profile_dir.join("Workspaces")).expect("create Workspaces dir");
    fs::write(
        profile_dir.join("Workspaces").join("WorkspacesCache"),
        r#"{"workspaces":[{"id":"ws-1","name":"Research","active":false,"color":3,
            "menuSubtitle":"4 tabs","last_active_time":1700000000.0,"isOwner":true,"shared":false}]}"#,
    )
    .expect("write WorkspacesCache");

    let output = fixture.run(&["workspaces", "--json"]);
    assert_success(&output, "edge-switch workspaces --json");

    let workspaces: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let workspaces = workspaces.as_array().expect("output should be an array");
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0]["id"], "ws-1");
    assert_eq!(workspaces[0]["profile_dir"], "Profile 1");
    assert_eq!(workspaces[0]["tab_count"], 4);
}

#[test]
fn test_default_output_has_no_log_lines() {
    let fixture = Fixture::new();
    let output = fixture.run(&["profiles"]);
    assert_success(&output, "edge-switch profiles");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains(r#""level":"INFO""#),
        "quiet mode should not emit info logs"
    );
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let fixture = Fixture::new();
    let output = fixture.run(&["-v", "profiles", "--json"]);
    assert_success(&output, "edge-switch -v profiles --json");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
    assert!(
        stderr.contains("cli.profiles_started"),
        "verbose mode should log to stderr, got: {}",
        stderr
    );
}

#[test]
fn test_malformed_references_are_usage_errors() {
    let fixture = Fixture::new();
    for args in [
        &["switch-tab", "bad"][..],
        &["switch-tab", "0:1"][..],
        &["close-tab", "1"][..],
        &["open-workspace", "nope"][..],
    ] {
        let output = fixture.run(args);
        assert_eq!(
            output.status.code(),
            Some(64),
            "{:?} should be a usage error. stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let fixture = Fixture::new();
    let output = fixture.run(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn test_open_unknown_profile_fails() {
    let fixture = Fixture::new();
    let output = fixture.run(&["open", "Profile 9"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Profile 9"),
        "the failure should name the profile"
    );
}

#[test]
fn test_completions_bash() {
    let fixture = Fixture::new();
    let output = fixture.run(&["completions", "bash"]);
    assert_success(&output, "edge-switch completions bash");
    assert!(String::from_utf8_lossy(&output.stdout).contains("edge-switch"));
}
