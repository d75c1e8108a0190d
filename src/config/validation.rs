//! Configuration validation logic.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum page size accepted by the timeline endpoint.
const MIN_MAX_RESULTS: u32 = 5;

/// Maximum page size accepted by the timeline endpoint.
const MAX_MAX_RESULTS: u32 = 100;

fn handle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{1,15}$").expect("handle pattern is valid"))
}

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_token(&config.api.bearer_token)?;
    validate_url("api.host", &config.api.host, &["http", "https"])?;
    validate_url("downloader.endpoint", &config.downloader.endpoint, &["ws", "wss"])?;

    if !config.downloader.base_directory.is_absolute() {
        return Err(Error::ConfigValidation {
            field: "downloader.base_directory".to_string(),
            message: format!(
                "Must be an absolute path (got {})",
                config.downloader.base_directory.display()
            ),
        });
    }

    let max_results = config.harvest.max_results;
    if !(MIN_MAX_RESULTS..=MAX_MAX_RESULTS).contains(&max_results) {
        return Err(Error::ConfigValidation {
            field: "harvest.max_results".to_string(),
            message: format!(
                "Must be between {} and {} (got {})",
                MIN_MAX_RESULTS, MAX_MAX_RESULTS, max_results
            ),
        });
    }

    if config.downloader.concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "downloader.concurrency".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    if config.api.timeout_seconds == 0 || config.downloader.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeouts must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Validate the bearer token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::MissingConfig(
            "api.bearer_token (or --token / X_BEARER_TOKEN)".to_string(),
        ));
    }

    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "api.bearer_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual bearer token."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate that a URL parses and uses one of the allowed schemes.
pub fn validate_url(field: &str, value: &str, schemes: &[&str]) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("Invalid URL '{}': {}", value, e),
    })?;

    if !schemes.contains(&url.scheme()) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Unsupported scheme '{}' (expected one of: {})",
                url.scheme(),
                schemes.join(", ")
            ),
        });
    }

    Ok(())
}

/// Validate an account handle argument.
///
/// A comma-separated list is accepted; each entry may carry a leading `@`.
pub fn validate_handles(handles: &str) -> Result<()> {
    let entries: Vec<&str> = handles
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(Error::MissingConfig(
            "account handle (at least one is required)".to_string(),
        ));
    }

    for handle in entries {
        let clean = handle.trim_start_matches('@');
        if !handle_regex().is_match(clean) {
            return Err(Error::ConfigValidation {
                field: "handle".to_string(),
                message: format!(
                    "Handle '{}' is invalid. Use 1-15 letters, digits or underscores.",
                    handle
                ),
            });
        }
    }

    Ok(())
}

/// Strip leading `@` from each handle, keeping the comma-separated form.
pub fn normalize_handles(handles: &str) -> String {
    handles
        .split(',')
        .map(|h| h.trim().trim_start_matches('@'))
        .filter(|h| !h.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
