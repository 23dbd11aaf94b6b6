//! The matching strategy seam.
//!
//! The `Matcher` trait lets callers select a ranking strategy by
//! configuration: the deterministic scorer is the system of record, and the
//! AI-backed reranker layers on top of it while sharing this interface, so
//! ranking logic is never duplicated per strategy.

use geo::Coord;

use crate::{ClothingItem, DonationCenter, MatchResult};

/// Maximum value of a match score after clamping.
pub const MAX_SCORE: u8 = 100;

/// Rank candidate centers against a set of donated items.
///
/// Implementations must be deterministic for the deterministic path, total
/// (never fail; degraded strategies fall back internally), and thread-safe
/// (`Send` + `Sync`) so one strategy instance can serve concurrent requests.
/// The returned list is sorted by score descending with known distance
/// ascending as tie-break, contains no center without qualifying items, and
/// is truncated to `limit` entries when a limit is given.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use givewear_core::{ClothingItem, DonationCenter, Matcher, MatchResult};
///
/// struct NoopMatcher;
///
/// impl Matcher for NoopMatcher {
///     fn recommend(
///         &self,
///         _items: &[ClothingItem],
///         _centers: &[DonationCenter],
///         _donor: Option<Coord<f64>>,
///         _limit: Option<usize>,
///     ) -> Vec<MatchResult> {
///         Vec::new()
///     }
/// }
///
/// assert!(NoopMatcher.recommend(&[], &[], None, None).is_empty());
/// ```
pub trait Matcher: Send + Sync {
    /// Score, annotate, and rank `centers` for the donated `items`.
    fn recommend(
        &self,
        items: &[ClothingItem],
        centers: &[DonationCenter],
        donor: Option<Coord<f64>>,
        limit: Option<usize>,
    ) -> Vec<MatchResult>;

    /// Clamp and round a raw score into `0..=`[`MAX_SCORE`].
    ///
    /// Non-finite input collapses to zero so scoring stays total.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamping bounds the value into u8 range before the cast"
    )]
    fn clamp_score(raw: f64) -> u8
    where
        Self: Sized,
    {
        if !raw.is_finite() {
            return 0;
        }
        raw.clamp(0.0, f64::from(MAX_SCORE)).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Unit;

    impl Matcher for Unit {
        fn recommend(
            &self,
            _items: &[ClothingItem],
            _centers: &[DonationCenter],
            _donor: Option<Coord<f64>>,
            _limit: Option<usize>,
        ) -> Vec<MatchResult> {
            Vec::new()
        }
    }

    #[rstest]
    #[case(-5.0, 0)]
    #[case(0.0, 0)]
    #[case(49.5, 50)]
    #[case(99.4, 99)]
    #[case(150.0, 100)]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, 0)]
    fn clamp_score_bounds_and_rounds(#[case] raw: f64, #[case] expected: u8) {
        assert_eq!(<Unit as Matcher>::clamp_score(raw), expected);
    }
}
