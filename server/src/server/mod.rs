pub mod api;
pub mod router;


use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::app::SharedState;

/// Start the axum HTTP server and run until `shutdown` is cancelled.
pub async fn start_server(state: SharedState, shutdown: CancellationToken) -> Result<()> {
    let addr = state.config().socket_addr();
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Filter server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}
