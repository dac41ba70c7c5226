//! Launcher configuration.
//!
//! Every setting comes from the environment with a documented default; the
//! matching CLI flags exist for local runs and tests. Resolution order per
//! value is flag > environment variable > default. The bind address, port,
//! and application target are fixed by the container contract and are
//! deliberately not configurable.

use std::path::PathBuf;

use clap::Parser;

/// Package index used when `PIP_MIRROR_URL` is unset.
pub const DEFAULT_PIP_MIRROR: &str = "https://pypi.org/simple";

/// Keep-alive timeout (seconds) forwarded to the server when
/// `WORKER_TIMEOUT` is unset.
pub const DEFAULT_WORKER_TIMEOUT: u64 = 10_000;

/// Where the container mounts the optional requirements file.
pub const DEFAULT_REQUIREMENTS_PATH: &str = "/dependencies/python-requirements.txt";

/// Address the server binds to.
pub const BIND_HOST: &str = "0.0.0.0";

/// Port the server binds to.
pub const BIND_PORT: u16 = 8194;

/// ASGI application target handed to the server.
pub const APP_TARGET: &str = "app.main:app";

/// Environment-derived launcher configuration, populated once at startup.
///
/// A malformed `WORKER_TIMEOUT` (anything that does not parse as an
/// unsigned integer) is rejected at parse time as a usage error rather
/// than silently falling back to the default.
#[derive(Debug, Clone, Parser)]
#[command(name = "sandbox-launcher")]
#[command(about = "Install sandbox dependencies, then launch the API server")]
#[command(version)]
pub struct LauncherConfig {
    /// Package index used when installing dependencies
    #[arg(long, env = "PIP_MIRROR_URL", default_value = DEFAULT_PIP_MIRROR)]
    pub mirror_url: String,

    /// Keep-alive timeout in seconds, forwarded to the server
    #[arg(long, env = "WORKER_TIMEOUT", default_value_t = DEFAULT_WORKER_TIMEOUT)]
    pub worker_timeout: u64,

    /// Requirements file installed before launch, when present
    #[arg(long, default_value = DEFAULT_REQUIREMENTS_PATH)]
    pub requirements: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::env;
    use std::sync::Mutex;

    /// Serializes tests that touch process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that restores an environment variable on drop.
    struct EnvVarGuard {
        key: String,
        previous: Option<String>,
    }

    impl EnvVarGuard {
        #[allow(unsafe_code)]
        fn set(key: &str, value: &str) -> Self {
            let previous = env::var(key).ok();
            unsafe {
                env::set_var(key, value);
            }
            Self {
                key: key.to_string(),
                previous,
            }
        }

        #[allow(unsafe_code)]
        fn unset(key: &str) -> Self {
            let previous = env::var(key).ok();
            unsafe {
                env::remove_var(key);
            }
            Self {
                key: key.to_string(),
                previous,
            }
        }
    }

    impl Drop for EnvVarGuard {
        #[allow(unsafe_code)]
        fn drop(&mut self) {
            if let Some(ref value) = self.previous {
                unsafe {
                    env::set_var(&self.key, value);
                }
            } else {
                unsafe {
                    env::remove_var(&self.key);
                }
            }
        }
    }

    #[test]
    fn test_parser_builds() {
        LauncherConfig::command().debug_assert();
    }

    #[test]
    fn test_documented_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _mirror = EnvVarGuard::unset("PIP_MIRROR_URL");
        let _timeout = EnvVarGuard::unset("WORKER_TIMEOUT");

        let config = LauncherConfig::parse_from(["sandbox-launcher"]);
        assert_eq!(config.mirror_url, DEFAULT_PIP_MIRROR);
        assert_eq!(config.worker_timeout, 10_000);
        assert_eq!(
            config.requirements,
            PathBuf::from(DEFAULT_REQUIREMENTS_PATH)
        );
    }

    #[test]
    fn test_mirror_from_environment() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _mirror = EnvVarGuard::set("PIP_MIRROR_URL", "https://example.com/simple");

        let config = LauncherConfig::parse_from(["sandbox-launcher"]);
        assert_eq!(config.mirror_url, "https://example.com/simple");
    }

    #[test]
    fn test_timeout_from_environment() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _timeout = EnvVarGuard::set("WORKER_TIMEOUT", "30");

        let config = LauncherConfig::parse_from(["sandbox-launcher"]);
        assert_eq!(config.worker_timeout, 30);
    }

    #[test]
    fn test_flag_overrides_environment() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _mirror = EnvVarGuard::set("PIP_MIRROR_URL", "https://env.example/simple");

        let config = LauncherConfig::parse_from([
            "sandbox-launcher",
            "--mirror-url",
            "https://flag.example/simple",
        ]);
        assert_eq!(config.mirror_url, "https://flag.example/simple");
    }

    #[test]
    fn test_non_integer_timeout_is_rejected() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _timeout = EnvVarGuard::set("WORKER_TIMEOUT", "soon");

        let result = LauncherConfig::try_parse_from(["sandbox-launcher"]);
        assert!(result.is_err());
    }
}
