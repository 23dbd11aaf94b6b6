//! Core domain types for the GiveWear donation-matching engine.
//!
//! The crate defines the canonical shapes the engine computes over: donated
//! [`ClothingItem`]s and their normalisation from raw form input, candidate
//! [`DonationCenter`]s with wildcard-aware [`NeedsProfile`]s, the
//! [`MatchRequest`]/[`MatchResponse`] boundary contracts, and the seams the
//! engine is assembled from: the [`Matcher`] ranking strategy and the
//! [`CenterStore`] data dependency.
//!
//! Constructors and the normaliser return `Result` to surface invalid input
//! early; everything downstream of validation is total and deterministic.

#![forbid(unsafe_code)]

mod center;
mod distance;
mod item;
mod matcher;
mod result;
mod store;
pub mod test_support;

pub use center::{ACCEPTS_ALL_TYPES, CenterKind, DonationCenter, NeedsProfile, Priority};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use item::{
    ClothingItem, Condition, ItemDraft, ItemValidationError, MAX_QUANTITY, MIN_QUANTITY,
    RecipientCategory, Season,
};
pub use matcher::{MAX_SCORE, Matcher};
pub use result::{MatchRequest, MatchResponse, MatchResult};
pub use store::{CenterStore, InMemoryCenterStore, StoreError};
