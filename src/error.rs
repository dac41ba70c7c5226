//! Launcher error types and exit-code mapping.
//!
//! Configuration problems never reach these types: missing environment
//! variables are covered by defaults, and malformed values are rejected by
//! the argument parser (usage error, exit code 2).

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors the launcher can hit before control transfers to the server.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The dependency installer ran but reported failure.
    #[error("dependency installation failed ({status})")]
    InstallFailed {
        /// Status the installer exited with.
        status: ExitStatus,
    },

    /// The dependency installer could not be started at all.
    #[error("failed to run installer `{program}`: {source}")]
    InstallSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Replacing the process image with the server failed.
    #[error("failed to launch server `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LauncherError {
    /// Map error to a process exit code.
    ///
    /// An install failure propagates the installer's own exit code, so the
    /// container supervisor sees exactly what pip reported. Failures to
    /// start a program at all map to 71 (`EX_OSERR`).
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::InstallFailed { status } => status.code().unwrap_or(1),
            LauncherError::InstallSpawn { .. } => 71,
            LauncherError::Launch { .. } => 71,
        }
    }
}
