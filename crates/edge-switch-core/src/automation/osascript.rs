use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::errors::AutomationError;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLanguage {
    AppleScript,
    JavaScript,
}

impl ScriptLanguage {
    fn args(self) -> &'static [&'static str] {
        match self {
            ScriptLanguage::AppleScript => &[],
            ScriptLanguage::JavaScript => &["-l", "JavaScript"],
        }
    }
}

/// Run a script through `osascript` and return its trimmed stdout.
///
/// The script is killed once `timeout` elapses.
pub fn run_osascript(
    script: &str,
    language: ScriptLanguage,
    timeout: Duration,
) -> Result<String, AutomationError> {
    debug!(
        event = "core.automation.osascript_started",
        language = ?language,
        timeout_ms = timeout.as_millis() as u64
    );

    let mut args: Vec<&str> = language.args().to_vec();
    args.push("-e");
    args.push(script);

    let stdout = run_with_timeout("osascript", &args, timeout)?;

    debug!(
        event = "core.automation.osascript_completed",
        bytes = stdout.len()
    );
    Ok(stdout)
}

/// Decode the JSON document a JXA script printed.
pub fn decode_json<T: DeserializeOwned>(stdout: &str) -> Result<T, AutomationError> {
    serde_json::from_str(stdout).map_err(|e| AutomationError::InvalidOutput {
        message: format!("{e}: {}", truncate_for_log(stdout)),
    })
}

fn truncate_for_log(text: &str) -> String {
    const LIMIT: usize = 200;
    match text.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_output(handle: JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}

fn kill_child(child: &mut Child, program: &str) {
    if let Err(e) = child.kill() {
        warn!(
            event = "core.automation.kill_failed",
            program = program,
            error = %e
        );
    }
    let _ = child.wait();
}

/// Spawn `program`, wait up to `timeout` for it to exit and collect stdout.
///
/// Output pipes are drained on their own threads so a chatty child cannot
/// block on a full pipe while we poll for its exit.
pub(crate) fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, AutomationError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AutomationError::SpawnFailed {
            message: format!("{program}: {e}"),
        })?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());
    let deadline = Instant::now() + timeout;

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                kill_child(&mut child, program);
                warn!(
                    event = "core.automation.script_timed_out",
                    program = program,
                    timeout_ms = timeout.as_millis() as u64
                );
                return Err(AutomationError::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                kill_child(&mut child, program);
                return Err(AutomationError::SpawnFailed {
                    message: format!("{program}: {e}"),
                });
            }
        }
    };

    let stdout = join_output(stdout);
    let stderr = join_output(stderr);

    if !status.success() {
        return Err(AutomationError::ScriptFailed {
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(stdout.trim().to_string())
}
