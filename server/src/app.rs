use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared by every axum handler.
///
/// Holds only the immutable configuration; requests never share mutable data.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: AppConfig,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(SharedStateInner { config }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.port
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.inner.config.jpeg_quality
    }
}
