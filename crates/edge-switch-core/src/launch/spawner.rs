use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Starts the browser process.
pub trait ProcessSpawner {
    fn spawn(&self, program: &Path, args: &[String]) -> std::io::Result<()>;
}

/// Spawns detached from our stdio; the browser outlives this process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, program: &Path, args: &[String]) -> std::io::Result<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(
            event = "core.launch.process_spawned",
            program = %program.display(),
            pid = child.id()
        );
        Ok(())
    }
}
