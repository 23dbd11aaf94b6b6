//! Retrieval of candidate centers from an external store.
//!
//! The engine treats the store as a black-box synchronous-returning
//! dependency: retry and backoff policy belongs to the implementation, not
//! to the matching pipeline. All failure variants are recoverable by a later
//! retry and callers must surface them as such.

use thiserror::Error;

use crate::DonationCenter;

/// Errors from [`CenterStore::active_centers`].
///
/// The taxonomy mirrors the hosted backend's failure modes so callers can
/// distinguish throttling from outage without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend rejected the request due to rate limiting (429-equivalent).
    #[error("center store rate limited; retry later")]
    RateLimited,
    /// The backend's usage quota is exhausted (402-equivalent).
    #[error("center store quota exhausted; retry later")]
    QuotaExhausted,
    /// The backend is unreachable or returned a server error (5xx-equivalent).
    #[error("center store unavailable: {message}")]
    Unavailable {
        /// Description of the underlying failure.
        message: String,
    },
}

/// Fetch the set of centers eligible for matching.
///
/// Implementations must return only active centers; inactive records never
/// reach the engine. Thread safety (`Send` + `Sync`) lets one store serve
/// concurrent, independent requests.
///
/// # Examples
/// ```
/// use givewear_core::{CenterKind, CenterStore, DonationCenter, InMemoryCenterStore};
///
/// let store = InMemoryCenterStore::new(vec![
///     DonationCenter::new("c1", "Hope House", CenterKind::Shelter),
///     DonationCenter::new("c2", "Closed Door", CenterKind::Ngo).inactive(),
/// ]);
/// let centers = store.active_centers()?;
/// assert_eq!(centers.len(), 1);
/// # Ok::<(), givewear_core::StoreError>(())
/// ```
pub trait CenterStore: Send + Sync {
    /// Return every center currently accepting donations.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backing service cannot be reached or
    /// refuses the request; every variant is recoverable by retrying later.
    fn active_centers(&self) -> Result<Vec<DonationCenter>, StoreError>;
}

/// In-memory [`CenterStore`] over a fixed center list.
///
/// Used by tests and by callers that already hold the center set; filters
/// out inactive records on every read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCenterStore {
    centers: Vec<DonationCenter>,
}

impl InMemoryCenterStore {
    /// Build a store over the given centers.
    #[must_use]
    pub fn new(centers: Vec<DonationCenter>) -> Self {
        Self { centers }
    }
}

impl CenterStore for InMemoryCenterStore {
    fn active_centers(&self) -> Result<Vec<DonationCenter>, StoreError> {
        Ok(self
            .centers
            .iter()
            .filter(|center| center.is_active)
            .cloned()
            .collect())
    }
}
