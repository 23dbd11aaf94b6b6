//! Request and response contracts for the matching boundary.
//!
//! Field names serialise in camelCase to match the original service wire
//! format; results are returned standalone, so each carries a full
//! denormalised copy of its center.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{ClothingItem, DonationCenter};

/// One ranked entry in a match response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Full copy of the matched center.
    pub center: DonationCenter,
    /// Rounded suitability score in `0..=100`.
    pub match_score: u8,
    /// Input items that qualified for this center.
    pub matched_items: Vec<ClothingItem>,
    /// Human-readable explanation of the score.
    pub reason: String,
    /// Distance from the donor in kilometres, when both positions are known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// A donor's matching request: the donated items plus an optional position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Normalised donated items.
    pub items: Vec<ClothingItem>,
    /// Donor latitude in degrees, when location sharing is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_latitude: Option<f64>,
    /// Donor longitude in degrees, when location sharing is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_longitude: Option<f64>,
}

impl MatchRequest {
    /// Build a request without a donor position.
    #[must_use]
    pub const fn new(items: Vec<ClothingItem>) -> Self {
        Self {
            items,
            donor_latitude: None,
            donor_longitude: None,
        }
    }

    /// Set the donor position, consuming `self` for chaining.
    #[must_use]
    pub const fn with_donor_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.donor_latitude = Some(latitude);
        self.donor_longitude = Some(longitude);
        self
    }

    /// Donor position as a coordinate (`x = longitude`, `y = latitude`).
    ///
    /// Returns `None` unless both components are present; a lone latitude or
    /// longitude carries no usable position.
    #[must_use]
    pub fn donor_location(&self) -> Option<Coord<f64>> {
        match (self.donor_latitude, self.donor_longitude) {
            (Some(y), Some(x)) => Some(Coord { x, y }),
            _ => None,
        }
    }
}

/// The matching boundary's response: ranked results, possibly empty.
///
/// An empty list is a legitimate "no matches" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Ranked results, best first.
    pub matches: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CenterKind, Condition, RecipientCategory, Season};
    use rstest::rstest;

    fn sample_item() -> ClothingItem {
        ClothingItem::new(
            "t-shirt",
            RecipientCategory::Children,
            Season::Summer,
            Condition::Good,
            1,
        )
    }

    #[rstest]
    fn donor_location_requires_both_components() {
        let request = MatchRequest::new(vec![sample_item()]);
        assert!(request.donor_location().is_none());

        let partial = MatchRequest {
            donor_latitude: Some(51.5),
            ..MatchRequest::new(vec![sample_item()])
        };
        assert!(partial.donor_location().is_none());

        let full = MatchRequest::new(vec![sample_item()]).with_donor_location(51.5, -0.12);
        let coord = full.donor_location().unwrap();
        assert_eq!(coord.y, 51.5);
        assert_eq!(coord.x, -0.12);
    }

    #[rstest]
    fn result_omits_missing_distance_on_the_wire() {
        let result = MatchResult {
            center: DonationCenter::new("c1", "Hope House", CenterKind::Shelter),
            match_score: 82,
            matched_items: vec![sample_item()],
            reason: "Good match.".into(),
            distance_km: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matchScore"], 82);
        assert!(json.get("distanceKm").is_none());
    }
}
