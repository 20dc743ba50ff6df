//! Sigbridge Signal Server
//!
//! HTTP webhook server that reconciles incoming trading signals against the
//! in-memory direction registry and writes agreed signals to the MT5 files
//! directory. Registry state is memory-resident and lost on restart.

use dotenvy::dotenv;
use sigbridge::config::{get_environment, Config};
use sigbridge::core::http::start_server;
use sigbridge::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();

    info!("Starting Sigbridge Signal Server");
    info!(environment = %get_environment(), "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(dir = %config.signal_files_dir.display(), symbols = ?config.symbols, "Signal files");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown
    info!("Signal server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down signal server...");
            info!("Signal server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
