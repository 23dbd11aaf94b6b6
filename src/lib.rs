//! Facade crate for the GiveWear donation-matching engine.
//!
//! Re-exports the core domain types and the deterministic matching engine,
//! and exposes the AI-backed reranking strategy behind the `ai` feature
//! flag.
//!
//! # Examples
//! ```
//! use givewear_engine::{
//!     DeterministicMatcher, InMemoryCenterStore, MatchRequest, find_matches, test_support,
//! };
//!
//! let store = InMemoryCenterStore::new(vec![test_support::orphanage("c1")]);
//! let request = MatchRequest::new(vec![test_support::tshirt(5)]);
//! let response = find_matches(&store, &DeterministicMatcher, &request, Some(5))?;
//! assert_eq!(response.matches.len(), 1);
//! # Ok::<(), givewear_engine::MatchError>(())
//! ```

#![forbid(unsafe_code)]

pub use givewear_core::{
    ACCEPTS_ALL_TYPES, CenterKind, CenterStore, ClothingItem, Condition, DonationCenter,
    InMemoryCenterStore, ItemDraft, ItemValidationError, MAX_QUANTITY, MAX_SCORE, MIN_QUANTITY,
    MatchRequest, MatchResponse, MatchResult, Matcher, NeedsProfile, Priority, RecipientCategory,
    Season, StoreError, distance_km, test_support,
};

pub use givewear_match::{
    DEFAULT_LIMIT, DeterministicMatcher, MatchError, build_reason, find_matches,
    relevant_candidates, sort_matches,
};

#[cfg(feature = "ai")]
pub use givewear_ai::{AiMatcher, AiMatcherConfig, AiServiceError, MatcherBuildError};
