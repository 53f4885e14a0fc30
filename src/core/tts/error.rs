//! Synthesis error taxonomy and response classification.
//!
//! Every backend attempt ends in exactly one classification. All of them are
//! recoverable by the attempt plan except [`TTSError::WriteError`], which aborts
//! the whole request.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of response-body characters kept in an error detail.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

// =============================================================================
// Error Codes
// =============================================================================

/// Stable error codes, as they appear in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Timeout,
    Network,
    #[serde(rename = "HTTP_5XX")]
    Http5xx,
    #[serde(rename = "HTTP_4XX")]
    Http4xx,
    EmptyAudio,
    WriteError,
    Config,
}

impl ErrorCode {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::Network => "NETWORK",
            ErrorCode::Http5xx => "HTTP_5XX",
            ErrorCode::Http4xx => "HTTP_4XX",
            ErrorCode::EmptyAudio => "EMPTY_AUDIO",
            ErrorCode::WriteError => "WRITE_ERROR",
            ErrorCode::Config => "CONFIG",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Error Type
// =============================================================================

/// Classified synthesis failure: a code plus a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TTSError {
    /// Per-attempt deadline exceeded before a response arrived
    #[error("{0}")]
    Timeout(String),

    /// Transport failure other than a timeout (refused, DNS, reset)
    #[error("{0}")]
    Network(String),

    /// Backend answered with a 5xx status
    #[error("{0}")]
    ServerError(String),

    /// Backend rejected the request with a 4xx status
    #[error("{0}")]
    ClientError(String),

    /// Non-error status but zero content bytes
    #[error("{0}")]
    EmptyAudio(String),

    /// Received audio could not be persisted locally
    #[error("{0}")]
    WriteError(String),

    /// Misconfiguration, including "no model was ever attempted"
    #[error("{0}")]
    Config(String),
}

impl TTSError {
    /// The taxonomy code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TTSError::Timeout(_) => ErrorCode::Timeout,
            TTSError::Network(_) => ErrorCode::Network,
            TTSError::ServerError(_) => ErrorCode::Http5xx,
            TTSError::ClientError(_) => ErrorCode::Http4xx,
            TTSError::EmptyAudio(_) => ErrorCode::EmptyAudio,
            TTSError::WriteError(_) => ErrorCode::WriteError,
            TTSError::Config(_) => ErrorCode::Config,
        }
    }

    /// The human-readable detail.
    pub fn detail(&self) -> &str {
        match self {
            TTSError::Timeout(d)
            | TTSError::Network(d)
            | TTSError::ServerError(d)
            | TTSError::ClientError(d)
            | TTSError::EmptyAudio(d)
            | TTSError::WriteError(d)
            | TTSError::Config(d) => d,
        }
    }

    /// Fatal errors abort the request regardless of remaining attempts.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, TTSError::WriteError(_))
    }

    pub(crate) fn timeout(after: Duration) -> Self {
        TTSError::Timeout(format!(
            "Request timed out after {}s",
            after.as_secs_f64()
        ))
    }
}

/// Result type for synthesis operations.
pub type TTSResult<T> = Result<T, TTSError>;

// =============================================================================
// Classification
// =============================================================================

/// Keeps at most [`MAX_ERROR_BODY_CHARS`] characters of a response body.
pub fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Classifies a completed HTTP exchange.
///
/// Status >= 500 is a server error, 400..500 a client error, and anything
/// below 400 succeeds only with a non-empty body.
pub fn classify_response(status: u16, body: Bytes) -> TTSResult<Bytes> {
    if status >= 500 {
        return Err(TTSError::ServerError(format!(
            "Server error {status}: {}",
            truncate_body(&String::from_utf8_lossy(&body))
        )));
    }
    if status >= 400 {
        return Err(TTSError::ClientError(format!(
            "Client error {status}: {}",
            truncate_body(&String::from_utf8_lossy(&body))
        )));
    }
    if body.is_empty() {
        return Err(TTSError::EmptyAudio(
            "Backend returned empty audio payload".to_string(),
        ));
    }
    Ok(body)
}

/// Classifies a transport-level failure from the HTTP client.
pub fn classify_transport_error(error: &reqwest::Error, timeout: Duration) -> TTSError {
    if error.is_timeout() {
        TTSError::timeout(timeout)
    } else {
        TTSError::Network(format!("Network failure: {error}"))
    }
}
