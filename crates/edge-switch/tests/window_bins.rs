//! Integration tests for the edge-list-windows and edge-raise-window binaries

use std::process::{Command, Output};

fn run_list_windows() -> Output {
    Command::new(env!("CARGO_BIN_EXE_edge-list-windows"))
        .output()
        .expect("Failed to execute 'edge-list-windows'")
}

fn run_raise_window(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edge-raise-window"))
        .args(args)
        .output()
        .expect("Failed to execute 'edge-raise-window'")
}

/// The window listing always exits 0 and prints a JSON array
#[test]
fn test_list_windows_prints_json_array() {
    let output = run_list_windows();

    assert!(
        output.status.success(),
        "edge-list-windows failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let windows: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let windows = windows.as_array().expect("output should be an array");

    for (position, window) in windows.iter().enumerate() {
        assert!(window.get("pid").is_some(), "window should have 'pid'");
        assert!(
            window.get("windowNumber").is_some(),
            "window should have 'windowNumber'"
        );
        assert!(window.get("title").is_some(), "window should have 'title'");
        assert_eq!(window["index"], position);
    }
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_list_windows_is_empty_without_window_server() {
    let output = run_list_windows();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_raise_window_usage_errors_exit_64() {
    for args in [&[][..], &["57622"][..], &["abc", "1"][..], &["1", "2", "3"][..]] {
        let output = run_raise_window(args);
        assert_eq!(
            output.status.code(),
            Some(64),
            "args {:?} should be a usage error. stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(
            output.stdout.is_empty(),
            "usage errors should not write to stdout"
        );
    }
}

#[test]
fn test_raise_window_help_exits_zero() {
    let output = run_raise_window(&["--help"]);
    assert!(output.status.success());
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_raise_window_fails_without_accessibility() {
    let output = run_raise_window(&["1", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "raise should not write to stdout");
    assert!(
        !output.stderr.is_empty(),
        "the failure reason should be reported on stderr"
    );
}
