//! Filter server binary.
//!
//! Loads configuration, starts the axum server, and shuts down on Ctrl+C.

use tokio_util::sync::CancellationToken;

use filter_server_lib::app::SharedState;
use filter_server_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = filter_server_lib::init_foundation();
    let state = SharedState::new(config);
    tracing::info!("Starting filter server");

    let shutdown = CancellationToken::new();
    let server_shutdown = shutdown.clone();
    let mut server_handle =
        tokio::spawn(async move { server::start_server(state, server_shutdown).await });

    tokio::select! {
        res = &mut server_handle => {
            // Server exited on its own (e.g. bind failure).
            return res?.inspect_err(|e| tracing::error!("Server failed: {e}"));
        }
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("Shutting down...");
            shutdown.cancel();
        }
    }

    server_handle.await??;
    tracing::info!("Server stopped");
    Ok(())
}
