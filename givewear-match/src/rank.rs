//! Ordering of scored results.
//!
//! Score descending, then known distance ascending on exact ties. Entries
//! without a distance sort after entries with one; the sort is stable, so
//! their relative order is preserved.

use std::cmp::Ordering;

use givewear_core::MatchResult;

fn distance_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort results in place: best score first, closest center on ties.
pub fn sort_matches(matches: &mut [MatchResult]) {
    matches.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| distance_order(a.distance_km, b.distance_km))
    });
}
