//! The deterministic match scorer.
//!
//! Each (item, center) pair earns independently weighted points for type,
//! recipient, and season overlap plus a donation-quality bonus. An item
//! qualifies for a center only when its pre-multiplier score clears the
//! relevance threshold; one dimension alone is never enough, any two are.
//! Qualifying contributions are scaled by the center's priority multiplier
//! and the item quantity, then the center total is expressed as a percentage
//! of the maximum attainable for the same quantity.
//!
//! This is the weighted-sum-with-multiplier formula of the original client,
//! normalised so scores are comparable across donations of any size.

use geo::Coord;
use givewear_core::{
    ClothingItem, Condition, DonationCenter, MatchResult, Matcher, NeedsProfile, Priority,
    distance_km,
};

use crate::filter::relevant_candidates;
use crate::rank::sort_matches;
use crate::rationale::build_reason;

/// Points for a type overlap.
pub const TYPE_WEIGHT: f64 = 40.0;
/// Points for a recipient-category overlap.
pub const GENDER_WEIGHT: f64 = 30.0;
/// Points for a season overlap.
pub const SEASON_WEIGHT: f64 = 20.0;
/// Quality bonus for new or like-new garments.
pub const CONDITION_TOP_BONUS: f64 = 15.0;
/// Quality bonus for garments in good condition.
pub const CONDITION_GOOD_BONUS: f64 = 10.0;
/// Minimum pre-multiplier item score for the item to qualify.
pub const QUALIFYING_THRESHOLD: f64 = 30.0;

const HIGH_PRIORITY_MULTIPLIER: f64 = 1.3;
const MEDIUM_PRIORITY_MULTIPLIER: f64 = 1.1;

/// Best attainable per-unit score before the priority multiplier.
const MAX_ITEM_SCORE: f64 = TYPE_WEIGHT + GENDER_WEIGHT + SEASON_WEIGHT + CONDITION_TOP_BONUS;

/// Best attainable per-unit score including the priority multiplier.
#[expect(
    clippy::float_arithmetic,
    reason = "scoring weights are floating-point by design"
)]
const MAX_UNIT_SCORE: f64 = MAX_ITEM_SCORE * HIGH_PRIORITY_MULTIPLIER;

const fn condition_bonus(condition: Condition) -> f64 {
    match condition {
        Condition::New | Condition::LikeNew => CONDITION_TOP_BONUS,
        Condition::Good => CONDITION_GOOD_BONUS,
        Condition::Fair => 0.0,
    }
}

const fn priority_multiplier(priority: Priority) -> f64 {
    match priority {
        Priority::High | Priority::Urgent => HIGH_PRIORITY_MULTIPLIER,
        Priority::Medium => MEDIUM_PRIORITY_MULTIPLIER,
        Priority::Low => 1.0,
    }
}

/// Pre-multiplier score of one item against one needs profile.
#[expect(
    clippy::float_arithmetic,
    reason = "scoring sums floating-point weights"
)]
fn item_score(item: &ClothingItem, needs: &NeedsProfile) -> f64 {
    let mut score = 0.0;
    if needs.accepts_type(&item.item_type) {
        score += TYPE_WEIGHT;
    }
    if needs.accepts_gender(item.recipient) {
        score += GENDER_WEIGHT;
    }
    if needs.accepts_season(item.season) {
        score += SEASON_WEIGHT;
    }
    score + condition_bonus(item.condition)
}

/// Score one center, returning its rounded score and the qualifying items.
///
/// Returns `None` when no item qualifies; such centers are excluded from the
/// result list entirely rather than zero-scored.
#[expect(
    clippy::float_arithmetic,
    reason = "aggregation multiplies weights by quantity and normalises"
)]
fn score_center(items: &[ClothingItem], center: &DonationCenter) -> Option<(u8, Vec<ClothingItem>)> {
    let multiplier = priority_multiplier(center.needs.priority);
    let mut total = 0.0;
    let mut attainable = 0.0;
    let mut matched = Vec::new();

    for item in items {
        let base = item_score(item, &center.needs);
        if base > QUALIFYING_THRESHOLD {
            let quantity = f64::from(item.quantity);
            total += base * multiplier * quantity;
            attainable += MAX_UNIT_SCORE * quantity;
            matched.push(item.clone());
        }
    }

    if matched.is_empty() {
        return None;
    }
    let score = DeterministicMatcher::clamp_score(total / attainable * 100.0);
    Some((score, matched))
}

/// The deterministic ranking strategy, the engine's system of record.
///
/// Stateless and referentially transparent: identical input always yields
/// identical output, and one instance may serve concurrent requests.
///
/// # Examples
/// ```
/// use givewear_core::{Matcher, test_support};
/// use givewear_match::DeterministicMatcher;
///
/// let items = vec![test_support::tshirt(5)];
/// let centers = vec![test_support::orphanage("c1")];
/// let results = DeterministicMatcher.recommend(&items, &centers, None, None);
/// assert_eq!(results.len(), 1);
/// assert!(results[0].match_score >= 90);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicMatcher;

impl Matcher for DeterministicMatcher {
    fn recommend(
        &self,
        items: &[ClothingItem],
        centers: &[DonationCenter],
        donor: Option<Coord<f64>>,
        limit: Option<usize>,
    ) -> Vec<MatchResult> {
        let candidates = relevant_candidates(items, centers);
        log::debug!(
            "scoring {} of {} centers for {} items",
            candidates.len(),
            centers.len(),
            items.len()
        );

        let mut results: Vec<MatchResult> = candidates
            .into_iter()
            .filter_map(|center| {
                score_center(items, center).map(|(match_score, matched_items)| MatchResult {
                    reason: build_reason(&matched_items, center),
                    distance_km: donor
                        .and_then(|from| center.coordinates.map(|to| distance_km(from, to))),
                    center: center.clone(),
                    match_score,
                    matched_items,
                })
            })
            .collect();

        sort_matches(&mut results);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        results
    }
}
