//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Origin allowed when neither `ALLOWED_ORIGINS` nor `RENDER_URL` is set.
pub const DEFAULT_ORIGIN: &str = "https://online-xe99.onrender.com";

/// Default request body limit (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("HOST", "0.0.0.0", "Interface the HTTP server binds to"),
    ("PORT", "5000", "TCP port the HTTP server listens on"),
    ("DEBUG", "false", "Verbose logging"),
    (
        "ALLOWED_ORIGINS",
        "",
        "Comma-separated CORS origins; '*' allows any origin",
    ),
    ("RENDER_URL", DEFAULT_ORIGIN, "Fallback CORS origin"),
    ("MAX_UPLOAD_BYTES", "20971520", "Maximum request body size in bytes"),
    ("JPEG_QUALITY", "95", "Quality of encoded JPEG responses (1-100)"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_setting;

    #[test]
    fn every_default_passes_validation() {
        for def in DEFAULT_SETTINGS.values() {
            assert!(
                validate_setting(def.key, def.default).is_ok(),
                "default for {} is invalid",
                def.key
            );
        }
    }

    #[test]
    fn upload_limit_default_matches_constant() {
        assert_eq!(
            get_default("MAX_UPLOAD_BYTES"),
            Some(DEFAULT_MAX_UPLOAD_BYTES.to_string().as_str())
        );
    }

    #[test]
    fn unknown_key_has_no_default() {
        assert_eq!(get_default("NOPE"), None);
    }
}
