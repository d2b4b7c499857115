// src/error.rs

//! Unified error handling for the exam schedule pipeline.

use std::fmt;

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Slug is not one of the registered departments
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    /// Upstream portal could not be reached or answered with an error status
    #[error("Upstream unavailable ({url}): {message}")]
    UpstreamUnavailable { url: String, message: String },

    /// Upstream answered, but not with the expected JSON envelope
    #[error("Malformed upstream response ({url}): {message}")]
    UpstreamMalformed { url: String, message: String },

    /// Fragment could not be read as markup at all
    #[error("Parser input error: {0}")]
    ParserInput(String),

    /// Key-value store could not serve the request
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an upstream transport error.
    pub fn upstream_unavailable(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::UpstreamUnavailable {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create an upstream envelope error.
    pub fn upstream_malformed(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::UpstreamMalformed {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a cache store error.
    pub fn cache(message: impl fmt::Display) -> Self {
        Self::CacheUnavailable(message.to_string())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether a caller-side retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. } | Self::UpstreamMalformed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = AppError::upstream_malformed("https://example.com", "missing field `html`");
        assert_eq!(
            err.to_string(),
            "Malformed upstream response (https://example.com): missing field `html`"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(AppError::upstream_unavailable("u", "timeout").is_retryable());
        assert!(!AppError::UnknownDepartment("x".into()).is_retryable());
        assert!(!AppError::ParserInput("x".into()).is_retryable());
    }
}
