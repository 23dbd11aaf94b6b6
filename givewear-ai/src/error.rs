//! Error types for the AI reranking path.
//!
//! None of these escape [`AiMatcher`](crate::AiMatcher): every variant is
//! logged and answered with the deterministic ranking instead.

use thiserror::Error;

/// Errors from constructing an [`AiMatcher`](crate::AiMatcher).
#[derive(Debug, Error)]
pub enum MatcherBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
}

/// Failures while asking the ranking service to rerank a result list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiServiceError {
    /// The request exceeded the configured timeout.
    #[error("ranking request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service throttled the request (HTTP 429).
    #[error("ranking service rate limited the request")]
    RateLimited,
    /// The service's usage quota is exhausted (HTTP 402).
    #[error("ranking service quota exhausted")]
    QuotaExhausted,
    /// The service answered with another error status.
    #[error("ranking request to {url} failed with HTTP {status}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The service could not be reached.
    #[error("ranking request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Description of the transport failure.
        message: String,
    },
    /// The response payload could not be interpreted.
    #[error("ranking response could not be parsed: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
    /// The service reported a non-ok application code.
    #[error("ranking service reported {code}: {message}")]
    Service {
        /// Application-level status code.
        code: String,
        /// Message accompanying the code.
        message: String,
    },
}
