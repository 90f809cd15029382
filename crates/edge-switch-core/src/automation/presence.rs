use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

/// Whether a process with exactly this name is running.
pub fn is_process_running(process_name: &str) -> bool {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    let running = system
        .processes()
        .values()
        .any(|process| process.name().to_string_lossy() == process_name);

    debug!(
        event = "core.automation.presence_checked",
        process = process_name,
        running = running
    );
    running
}
