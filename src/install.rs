//! Conditional Python dependency installation.
//!
//! The container may mount a requirements file; when it is present the
//! launcher runs pip against the configured package index before the server
//! starts. A missing file skips the step entirely. Any installer failure is
//! fatal and carries pip's own exit status. No retry, no fallback index.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::LauncherError;

/// Installer binary, resolved via `PATH`. Dependencies go into the system
/// environment, so there is no interpreter or venv indirection here.
pub const PIP_PROGRAM: &str = "pip3";

/// Build the installer argument list for a requirements file and mirror.
pub fn pip_args(requirements: &Path, mirror_url: &str) -> Vec<OsString> {
    vec![
        OsString::from("install"),
        OsString::from("-r"),
        requirements.as_os_str().to_os_string(),
        OsString::from("-i"),
        OsString::from(mirror_url),
    ]
}

/// Install dependencies with pip if the requirements file exists.
///
/// Returns `true` when the installer ran, `false` when the step was skipped.
pub fn install_if_required(requirements: &Path, mirror_url: &str) -> Result<bool, LauncherError> {
    install_with(PIP_PROGRAM, requirements, mirror_url)
}

/// Same as [`install_if_required`] but with an explicit installer binary.
/// This is the seam tests use to substitute a stub executable for pip.
///
/// Installer output goes straight to the launcher's standard streams.
pub fn install_with(
    program: &str,
    requirements: &Path,
    mirror_url: &str,
) -> Result<bool, LauncherError> {
    if !requirements.exists() {
        debug!(
            path = %requirements.display(),
            "no requirements file mounted, skipping dependency install"
        );
        return Ok(false);
    }

    println!(
        "Installing Python dependencies from {}",
        requirements.display()
    );
    println!("Using package index {mirror_url}");

    let status = Command::new(program)
        .args(pip_args(requirements, mirror_url))
        .status()
        .map_err(|source| LauncherError::InstallSpawn {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(LauncherError::InstallFailed { status });
    }

    println!("Dependency installation complete");
    Ok(true)
}
