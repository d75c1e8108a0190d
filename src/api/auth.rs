//! Request authorization.

use reqwest::header::HeaderValue;

use crate::error::{Error, Result};

/// Build the `Authorization` header value for an app bearer token.
pub fn bearer_header(token: &str) -> Result<HeaderValue> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::MissingConfig("api.bearer_token".to_string()));
    }

    let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        Error::ConfigValidation {
            field: "api.bearer_token".to_string(),
            message: "Token contains characters not allowed in an HTTP header".to_string(),
        }
    })?;
    value.set_sensitive(true);

    Ok(value)
}
