//! AI-backed reranking strategy for donation matching.
//!
//! [`AiMatcher`] implements the same [`Matcher`] seam as the deterministic
//! engine, so callers select it by configuration rather than by a parallel
//! code path. It always computes the deterministic ranking first, then asks
//! an external text-generation ranking service to reorder and re-explain it
//! over HTTP.
//!
//! The fallback is required behaviour, not an optimisation: on timeout,
//! rate limiting, quota exhaustion, transport failure, or a malformed or
//! non-ok response, the error is logged at `warn` and the deterministic
//! ranking is returned unchanged. The deterministic path is the system of
//! record; this crate only layers on top of it.
//!
//! # Architecture
//!
//! The [`Matcher`] trait is synchronous to keep the engine embeddable in
//! synchronous contexts. This strategy bridges the async HTTP call to the
//! sync interface by blocking on a Tokio runtime internally: when called
//! from within a multi-threaded Tokio runtime it uses that runtime's handle
//! with [`tokio::task::block_in_place`]; otherwise it blocks on its own
//! stored current-thread runtime.
//!
//! # Examples
//!
//! ```no_run
//! use givewear_ai::AiMatcher;
//! use givewear_core::{Matcher, test_support};
//!
//! let matcher = AiMatcher::new("http://localhost:8787")?;
//! let results = matcher.recommend(
//!     &[test_support::tshirt(5)],
//!     &[test_support::orphanage("c1")],
//!     None,
//!     Some(5),
//! );
//! assert!(!results.is_empty());
//! # Ok::<(), givewear_ai::MatcherBuildError>(())
//! ```

#![forbid(unsafe_code)]

use std::time::Duration;

use geo::Coord;
use givewear_core::{ClothingItem, DonationCenter, MatchResult, Matcher};
use givewear_match::DeterministicMatcher;
use reqwest::{Client, StatusCode};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

mod api;
mod error;

pub use api::{RankCandidate, RankEntry, RankRequest, RankResponse, apply_rankings};
pub use error::{AiServiceError, MatcherBuildError};

/// Default user agent for ranking requests.
pub const DEFAULT_USER_AGENT: &str = "givewear-rerank/0.1";

/// Default request timeout in seconds.
///
/// The reranker sits on the donor's request path, so the bound is tight;
/// a slow service must degrade to the deterministic ranking, never block.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`AiMatcher`].
#[derive(Debug, Clone)]
pub struct AiMatcherConfig {
    /// Base URL for the ranking service (e.g., `"http://localhost:8787"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for AiMatcherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8787".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl AiMatcherConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Matching strategy that reranks the deterministic result via an external
/// ranking service, falling back transparently when the service degrades.
pub struct AiMatcher {
    client: Client,
    config: AiMatcherConfig,
    runtime: Runtime,
    fallback: DeterministicMatcher,
}

impl std::fmt::Debug for AiMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiMatcher")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl AiMatcher {
    /// Create a new matcher with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, MatcherBuildError> {
        Self::with_config(AiMatcherConfig::new(base_url))
    }

    /// Create a new matcher with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: AiMatcherConfig) -> Result<Self, MatcherBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(MatcherBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(MatcherBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
            fallback: DeterministicMatcher,
        })
    }

    /// Build the rerank endpoint URL.
    fn rerank_url(&self) -> String {
        format!("{}/v1/rerank", self.config.base_url.trim_end_matches('/'))
    }

    /// Ask the service to rerank the deterministic results.
    async fn fetch_rankings_async(
        &self,
        items: &[ClothingItem],
        results: &[MatchResult],
    ) -> Result<Vec<RankEntry>, AiServiceError> {
        let url = self.rerank_url();
        let body = RankRequest::new(items, results);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let rank_response: RankResponse =
            response.json().await.map_err(|err| AiServiceError::Parse {
                message: err.to_string(),
            })?;

        Self::convert_response(rank_response)
    }

    /// Convert a reqwest error to an [`AiServiceError`].
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> AiServiceError {
        if error.is_timeout() {
            return AiServiceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        match error.status() {
            Some(StatusCode::TOO_MANY_REQUESTS) => AiServiceError::RateLimited,
            Some(StatusCode::PAYMENT_REQUIRED) => AiServiceError::QuotaExhausted,
            Some(status) => AiServiceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
            },
            None => AiServiceError::Network {
                url: url.to_owned(),
                message: error.to_string(),
            },
        }
    }

    /// Convert a service response to ranking entries.
    fn convert_response(response: RankResponse) -> Result<Vec<RankEntry>, AiServiceError> {
        if !response.is_ok() {
            return Err(AiServiceError::Service {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
        response.rankings.ok_or_else(|| AiServiceError::Parse {
            message: "ranking response missing rankings array".to_owned(),
        })
    }

    /// Bridge the async rerank call into the synchronous trait method.
    fn fetch_rankings(
        &self,
        items: &[ClothingItem],
        results: &[MatchResult],
    ) -> Result<Vec<RankEntry>, AiServiceError> {
        let future = self.fetch_rankings_async(items, results);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }
}

impl Matcher for AiMatcher {
    /// Rank centers with the deterministic engine, then rerank via the
    /// external service when it is healthy.
    ///
    /// Service failures never surface: the deterministic ranking is the
    /// answer whenever the rerank cannot improve on it.
    fn recommend(
        &self,
        items: &[ClothingItem],
        centers: &[DonationCenter],
        donor: Option<Coord<f64>>,
        limit: Option<usize>,
    ) -> Vec<MatchResult> {
        let deterministic = self.fallback.recommend(items, centers, donor, limit);
        if deterministic.is_empty() {
            // Nothing to rerank; skip the network round-trip.
            return deterministic;
        }

        match self.fetch_rankings(items, &deterministic) {
            Ok(entries) => apply_rankings(deterministic, &entries),
            Err(err) => {
                log::warn!("AI reranker degraded, using deterministic ranking: {err}");
                deterministic
            }
        }
    }
}
