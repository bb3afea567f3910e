//! Error types used throughout the client and workflows

use thiserror::Error;

/// Main error type for pcokit
#[derive(Error, Debug)]
pub enum PcoError {
    /// Required credential or setting missing from the environment.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single HTTP call failed: transport error, timeout, or non-success
    /// status. `detail` carries the transport error description and, when a
    /// response was received, its status and raw body text.
    #[error("API {method} request to {url} failed: {detail}")]
    Request { method: String, url: String, detail: String },

    /// A named lookup (field definition, channel, ...) matched nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PcoError {
    /// Build a request failure for `method` against `url`.
    pub fn request(
        method: impl Into<String>,
        url: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Request { method: method.into(), url: url.into(), detail: detail.into() }
    }
}

/// Result type alias for pcokit operations
pub type Result<T> = std::result::Result<T, PcoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_message_carries_verb_url_and_detail() {
        let err = PcoError::request("DELETE", "https://example.com/people/1", "status 409: busy");
        let msg = err.to_string();
        assert!(msg.contains("DELETE"));
        assert!(msg.contains("https://example.com/people/1"));
        assert!(msg.contains("status 409: busy"));
    }

    #[test]
    fn not_found_is_distinct_from_request_failure() {
        let err = PcoError::NotFound("field definition 'Allergies'".into());
        assert!(matches!(err, PcoError::NotFound(_)));
        assert!(err.to_string().starts_with("Not found"));
    }
}
