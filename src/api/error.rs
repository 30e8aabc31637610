//! Uniform error shape for remote API failures
//!
//! Transport failures, non-success HTTP statuses and unparseable response
//! bodies all normalize into a single [`ApiError`] carrying the original
//! detail. Callers receive it through `anyhow::Error` and can downcast when
//! they need the status code.

use std::fmt;

#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code, when the failure happened after a response arrived.
    pub status: Option<u16>,
    /// Original error detail: remote error body, transport error text, or
    /// parse failure description.
    pub message: String,
}

impl ApiError {
    /// Non-success HTTP status with the remote error body.
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: detail.into(),
        }
    }

    /// Network-level failure before any response was received.
    pub fn transport(source: reqwest::Error) -> Self {
        Self {
            status: None,
            message: source.to_string(),
        }
    }

    /// Response arrived but its body was not the JSON we expected.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            message: detail.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "API request failed (status {}): {}", status, self.message),
            None => write!(f, "API request failed: {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}
