//! Entry point: resolve configuration, install dependencies, exec the server.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sandbox_launcher::{LauncherConfig, run};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables before the parser reads them
    dotenvy::dotenv().ok();

    let config = LauncherConfig::parse();

    // run() only comes back on failure; on success the process image is the
    // server's by now
    if let Err(err) = run(&config) {
        eprintln!("sandbox-launcher: {err}");
        process::exit(err.exit_code());
    }
}
