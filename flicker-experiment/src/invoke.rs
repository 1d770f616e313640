use std::process::{Command, ExitStatus};

use flicker_core::{FlickerError, Result};
use tracing::{debug, info};

use crate::command::CommandVector;

/// Runs a built renderer invocation to completion
pub trait Launcher {
    /// Blocks until the renderer exits and returns its exit code verbatim.
    ///
    /// A nonzero code is the renderer's own outcome, not an error here. Only
    /// a failure to start the process is reported as
    /// [`FlickerError::LaunchError`].
    fn launch(&self, command: &CommandVector) -> Result<i32>;
}

/// Spawns the renderer as a child process inheriting stdio, env and cwd
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &CommandVector) -> Result<i32> {
        info!(program = command.program(), argv = %command, "launching renderer");
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|source| FlickerError::LaunchError {
                program: command.program().to_string(),
                source,
            })?;
        let code = exit_code(status);
        debug!(%status, code, "renderer exited");
        Ok(code)
    }
}

/// Exit code of a finished child. Signal deaths map to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
