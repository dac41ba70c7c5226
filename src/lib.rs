//! Container entry point for the sandbox API.
//!
//! Boot sequence:
//!
//! 1. Resolve configuration from the environment (package mirror, keep-alive
//!    timeout) with documented defaults.
//! 2. If a requirements file is mounted, install Python dependencies via pip
//!    against the configured mirror. A failed install aborts the boot.
//! 3. Replace this process with the uvicorn server bound to `0.0.0.0:8194`.
//!
//! Step 3 uses exec semantics on Unix: the server inherits the launcher's PID
//! and standard streams, and no launcher code runs afterwards.

pub mod config;
pub mod error;
pub mod install;
pub mod launch;

pub use config::LauncherConfig;
pub use error::LauncherError;

use std::convert::Infallible;

use tracing::info;

/// Run the full boot sequence. Only returns on failure: on success the
/// process image has been replaced by the server (or, on non-Unix hosts,
/// the launcher has already exited with the server's status).
pub fn run(config: &LauncherConfig) -> Result<Infallible, LauncherError> {
    info!(
        mirror_url = %config.mirror_url,
        worker_timeout = config.worker_timeout,
        requirements = %config.requirements.display(),
        "sandbox launcher starting"
    );

    install::install_if_required(&config.requirements, &config.mirror_url)?;

    info!(
        host = config::BIND_HOST,
        port = config::BIND_PORT,
        app = config::APP_TARGET,
        "handing off to server"
    );
    launch::exec_server(config)
}
