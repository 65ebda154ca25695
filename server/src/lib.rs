//! HTTP service that applies a fixed set of image filters to uploads.

pub mod app;
pub mod config;
pub mod server;

use tracing_subscriber::EnvFilter;

use config::AppConfig;
use config::validation::parse_bool;

/// Load .env from the first candidate path that exists.
fn load_dotenv() -> Option<&'static str> {
    let candidates = [".env", "../.env"];
    candidates
        .into_iter()
        .find(|path| dotenvy::from_filename(path).is_ok())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `DEBUG` flag.
pub fn init_tracing() {
    let debug = std::env::var("DEBUG")
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(false);
    let fallback = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Load .env, initialize tracing, and build the process configuration.
pub fn init_foundation() -> AppConfig {
    let dotenv = load_dotenv();
    init_tracing();

    match dotenv {
        Some(path) => tracing::info!("Loaded .env from: {path}"),
        None => tracing::info!("No .env file found, using system environment variables"),
    }

    let config = AppConfig::from_env();
    tracing::info!(
        addr = %config.socket_addr(),
        debug = config.debug,
        origins = ?config.allowed_origins,
        max_upload_bytes = config.max_upload_bytes,
        "Settings loaded"
    );
    config
}
