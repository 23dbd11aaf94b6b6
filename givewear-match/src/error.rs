//! Errors surfaced by the matching pipeline.

use givewear_core::StoreError;
use thiserror::Error;

/// Errors from [`find_matches`](crate::find_matches).
///
/// An empty result list is a legitimate outcome, never an error; callers
/// should render a distinct "no matches" state for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The request contained no donated items.
    #[error("a donation request must contain at least one item")]
    NoItems,
    /// The center store could not supply candidates; recoverable by retry.
    #[error("failed to fetch donation centers")]
    Store(#[from] StoreError),
}
