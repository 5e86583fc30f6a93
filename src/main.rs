//! Reliable Proxy
//!
//! A dynamic forwarding proxy built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server ──▶ proxy::target ──┬──▶ http::status (GET /, no origin)
//!                                                       │
//!                                                       └──▶ proxy::forward ──▶ Upstream
//!     Client Response                                                  │
//!     ◀──────────────────────────────────────────────── streamed relay ┘
//!
//!     Startup (detached):
//!     region::resolver ──▶ cache hit? ──▶ region::state
//!                      └─▶ region::race (geo probes, deadline) ──▶ cache + region::state
//! ```

use clap::Parser;
use std::path::PathBuf;

use reliable_proxy::config::{self, EnvVars};
use reliable_proxy::lifecycle::{signals, startup, Shutdown};
use reliable_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "reliable-proxy")]
#[command(about = "Dynamic HTTP forwarding proxy", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// KEY=VALUE file read before the environment is consulted
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut env = EnvVars::from_process();
    env.load_file(&cli.env_file);

    let config = config::load_config(cli.config.as_deref(), &env)?;
    logging::init_logging(&config.observability, &env);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.listener.port,
        region_enabled = config.region.enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::trigger_on_signal(shutdown.clone()));

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
