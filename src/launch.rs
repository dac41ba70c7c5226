//! Server launch via process replacement.
//!
//! The launcher always hands off to uvicorn on the fixed bind address; only
//! the keep-alive timeout comes from configuration.

use std::convert::Infallible;
use std::ffi::OsString;
use std::process::Command;

use crate::config::{APP_TARGET, BIND_HOST, BIND_PORT, LauncherConfig};
use crate::error::LauncherError;

/// Server binary, resolved via `PATH`.
pub const SERVER_PROGRAM: &str = "uvicorn";

/// Build the server argument list for a given keep-alive timeout.
pub fn server_args(worker_timeout: u64) -> Vec<OsString> {
    vec![
        OsString::from(APP_TARGET),
        OsString::from("--host"),
        OsString::from(BIND_HOST),
        OsString::from("--port"),
        OsString::from(BIND_PORT.to_string()),
        OsString::from("--timeout-keep-alive"),
        OsString::from(worker_timeout.to_string()),
    ]
}

/// Replace the current process with the server.
///
/// The server inherits the launcher's PID and standard streams; on success
/// this function never returns. It only returns when exec itself fails.
#[cfg(unix)]
pub fn exec_server(config: &LauncherConfig) -> Result<Infallible, LauncherError> {
    use std::os::unix::process::CommandExt;

    let source = Command::new(SERVER_PROGRAM)
        .args(server_args(config.worker_timeout))
        .exec();
    Err(LauncherError::Launch {
        program: SERVER_PROGRAM.to_string(),
        source,
    })
}

/// Launch the server and exit with its status.
///
/// Non-Unix hosts have no exec, so the closest equivalent is spawn, wait,
/// and exit immediately with the child's code. No launcher logic runs after
/// the launch on any platform.
#[cfg(not(unix))]
pub fn exec_server(config: &LauncherConfig) -> Result<Infallible, LauncherError> {
    let status = Command::new(SERVER_PROGRAM)
        .args(server_args(config.worker_timeout))
        .status()
        .map_err(|source| LauncherError::Launch {
            program: SERVER_PROGRAM.to_string(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
