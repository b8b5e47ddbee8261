//! Assembly Viewer - interactive assembly-instruction viewer
//!
//! Starts the viewer server: loads the parts and steps catalogs from the
//! data directory, then serves the embedded frontend and the REST event
//! surface.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3002, ./data)
//! stepview
//!
//! # Specify port and data directory
//! stepview --port 8080 --data-dir /srv/viewer/data
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stepview::config::Config;
use stepview::constants::{APP_BINARY_NAME, APP_NAME};
use stepview::web;

/// Assembly Viewer - step-by-step assembly instructions with a 3D part view
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Directory containing materials.csv, steps.csv and models/
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration if present, then apply CLI overrides
    let mut config = if Config::exists() {
        Config::load()?
    } else {
        Config::default()
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.paths.data_dir = Some(data_dir);
    }

    info!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    info!("Data directory: {}", config.data_dir().display());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    web::run_server(config, addr).await
}
