//! Runtime application configuration loaded once from the environment.

use std::net::{IpAddr, SocketAddr};

use super::defaults::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_ORIGIN, get_default};
use super::validation::{parse_bool, split_origins, validate_setting};

/// Immutable process configuration, built at startup and handed to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    /// CORS allow-list. `["*"]` allows any origin; empty disables CORS headers.
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub jpeg_quality: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            debug: false,
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            jpeg_quality: image_processor::DEFAULT_JPEG_QUALITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys take their defaults; invalid values are logged and
    /// replaced by the default rather than aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> String {
            let default = get_default(key).unwrap_or_default();
            match lookup(key) {
                Some(v) => match validate_setting(key, &v) {
                    Ok(()) => v,
                    Err(e) => {
                        tracing::warn!(key, value = %v, "Invalid setting ({e}), using default");
                        default.to_string()
                    }
                },
                None => default.to_string(),
            }
        };

        let defaults = Self::default();

        let host = g("HOST").trim().parse().unwrap_or_else(|_| {
            tracing::warn!("HOST is not an IP address, binding to {}", defaults.host);
            defaults.host
        });

        let origins_raw = {
            let explicit = g("ALLOWED_ORIGINS");
            if explicit.trim().is_empty() {
                g("RENDER_URL")
            } else {
                explicit
            }
        };
        let allowed_origins = split_origins(&origins_raw).map(String::from).collect();

        Self {
            host,
            port: g("PORT").parse().unwrap_or(defaults.port),
            debug: parse_bool(&g("DEBUG")).unwrap_or(defaults.debug),
            allowed_origins,
            max_upload_bytes: g("MAX_UPLOAD_BYTES")
                .parse()
                .unwrap_or(defaults.max_upload_bytes),
            jpeg_quality: g("JPEG_QUALITY").parse().unwrap_or(defaults.jpeg_quality),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the allow-list contains the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
