//! VLC CORS proxy.
//!
//! ```text
//!   Browser ──▶ :5000 ─┬─ OPTIONS *      → 200 + CORS headers
//!                      ├─ GET /vlc/<p>   → http://<upstream>/<p> (+ Basic auth)
//!                      └─ anything else  → static files
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use vlc_cors_proxy::http::HttpServer;
use vlc_cors_proxy::lifecycle::{resolve_config, signals, Overrides, Shutdown};
use vlc_cors_proxy::observability;

#[derive(Parser)]
#[command(name = "vlc-cors-proxy")]
#[command(about = "CORS proxy and static file server for the VLC HTTP interface", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (e.g. 0.0.0.0:5000).
    #[arg(short, long)]
    bind: Option<String>,

    /// VLC HTTP interface host:port.
    #[arg(short, long)]
    upstream: Option<String>,

    /// Directory served for non-proxied paths.
    #[arg(short, long)]
    root: Option<String>,

    /// Log level when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = Overrides {
        bind_address: cli.bind,
        upstream_address: cli.upstream,
        static_root: cli.root,
        log_level: cli.log_level,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    observability::init_logging(&config.observability.log_level);
    tracing::info!("vlc-cors-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        static_root = %config.static_files.root,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "CORS proxy listening");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
