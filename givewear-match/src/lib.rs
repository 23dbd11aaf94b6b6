//! Deterministic donation-matching engine.
//!
//! Given normalised clothing items and candidate centers, the engine
//! pre-filters plausible candidates, scores each center with weighted
//! attribute overlaps, annotates distances when the donor's position is
//! known, generates a rationale per center, and ranks the results.
//!
//! The computation is pure, synchronous, and single-threaded: no shared
//! mutable state, safe to invoke concurrently for independent requests.
//! [`find_matches`] wires the engine to a
//! [`CenterStore`](givewear_core::CenterStore) for callers that do not hold
//! the center set themselves.
//!
//! # Examples
//! ```
//! use givewear_core::{InMemoryCenterStore, MatchRequest, test_support};
//! use givewear_match::{DEFAULT_LIMIT, DeterministicMatcher, find_matches};
//!
//! let store = InMemoryCenterStore::new(vec![test_support::orphanage("c1")]);
//! let request = MatchRequest::new(vec![test_support::tshirt(5)]);
//! let response = find_matches(
//!     &store,
//!     &DeterministicMatcher,
//!     &request,
//!     Some(DEFAULT_LIMIT),
//! )?;
//! assert_eq!(response.matches.len(), 1);
//! # Ok::<(), givewear_match::MatchError>(())
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod filter;
mod rank;
mod rationale;

pub use engine::{
    CONDITION_GOOD_BONUS, CONDITION_TOP_BONUS, DeterministicMatcher, GENDER_WEIGHT,
    QUALIFYING_THRESHOLD, SEASON_WEIGHT, TYPE_WEIGHT,
};
pub use error::MatchError;
pub use filter::relevant_candidates;
pub use rank::sort_matches;
pub use rationale::build_reason;

use givewear_core::{CenterStore, MatchRequest, MatchResponse, Matcher};

/// Result count the original service returned to donors.
///
/// A limit is always caller-supplied policy; full in-page listings pass
/// `None` instead.
pub const DEFAULT_LIMIT: usize = 5;

/// Fetch active centers from `store` and rank them for `request`.
///
/// # Errors
/// Returns [`MatchError::NoItems`] for an empty item list and propagates
/// [`StoreError`](givewear_core::StoreError) when the center store fails.
/// An empty [`MatchResponse`] is a valid no-match outcome, not an error.
pub fn find_matches(
    store: &dyn CenterStore,
    matcher: &dyn Matcher,
    request: &MatchRequest,
    limit: Option<usize>,
) -> Result<MatchResponse, MatchError> {
    if request.items.is_empty() {
        return Err(MatchError::NoItems);
    }
    let centers = store.active_centers()?;
    let matches = matcher.recommend(&request.items, &centers, request.donor_location(), limit);
    Ok(MatchResponse { matches })
}
