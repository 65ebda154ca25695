//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "HOST" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        "PORT" => validate_int_range(value, 1, 65535)?,
        "DEBUG" => {
            if parse_bool(value).is_none() {
                return Err("must be one of 1/0, true/false, yes/no".into());
            }
        }
        "MAX_UPLOAD_BYTES" => {
            let v: usize = value.parse().map_err(|_| "must be a positive integer")?;
            if v == 0 {
                return Err("must be greater than 0".into());
            }
        }
        "JPEG_QUALITY" => validate_int_range(value, 1, 100)?,
        "ALLOWED_ORIGINS" | "RENDER_URL" => {
            for origin in split_origins(value) {
                if origin != "*" && !origin.starts_with("http://") && !origin.starts_with("https://")
                {
                    return Err(format!("invalid origin '{origin}' (expected http(s)://...)"));
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Parse a loose boolean flag (`1`, `true`, `yes`, `on` and their negatives).
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes.
pub fn split_origins(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
