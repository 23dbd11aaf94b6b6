//! Wire types for the external ranking service.
//!
//! The service receives the donated items and the deterministic ranking,
//! and may reorder known centers and rewrite their explanations. Everything
//! it cannot or does not rerank keeps its deterministic position, so a
//! partial or sloppy response degrades gracefully instead of failing.

use givewear_core::{CenterKind, ClothingItem, MatchResult, Matcher};
use givewear_match::DeterministicMatcher;
use serde::{Deserialize, Serialize};

/// Request payload: items plus the deterministic ranking to improve on.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest<'a> {
    /// The donated items.
    pub items: &'a [ClothingItem],
    /// Deterministic candidates, best first.
    pub candidates: Vec<RankCandidate<'a>>,
}

impl<'a> RankRequest<'a> {
    /// Build a request from the deterministic results.
    #[must_use]
    pub fn new(items: &'a [ClothingItem], results: &'a [MatchResult]) -> Self {
        Self {
            items,
            candidates: results
                .iter()
                .map(|result| RankCandidate {
                    id: &result.center.id,
                    name: &result.center.name,
                    kind: result.center.kind,
                    match_score: result.match_score,
                    reason: &result.reason,
                })
                .collect(),
        }
    }
}

/// One candidate as presented to the ranking service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankCandidate<'a> {
    /// Stable center identifier.
    pub id: &'a str,
    /// Center display name.
    pub name: &'a str,
    /// Kind of organisation.
    pub kind: CenterKind,
    /// Deterministic score.
    pub match_score: u8,
    /// Deterministic rationale.
    pub reason: &'a str,
}

/// Ranking service response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    /// Application status; `"ok"` on success.
    pub code: String,
    /// Optional message when `code` is not `"ok"`.
    #[serde(default)]
    pub message: Option<String>,
    /// Reranked entries, best first.
    #[serde(default)]
    pub rankings: Option<Vec<RankEntry>>,
}

impl RankResponse {
    /// Check whether the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "ok"
    }
}

/// One reranked entry returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    /// Identifier of the center being repositioned.
    pub center_id: String,
    /// Replacement score; the deterministic score is kept when absent.
    #[serde(default)]
    pub match_score: Option<f64>,
    /// Replacement explanation; the deterministic one is kept when absent.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Apply a service ranking on top of the deterministic result list.
///
/// Entries are honoured in order for ids present in `results`; unknown ids
/// are ignored. Results the service did not mention follow in their
/// deterministic order. Replacement scores are clamped into `0..=100`.
#[must_use]
pub fn apply_rankings(results: Vec<MatchResult>, entries: &[RankEntry]) -> Vec<MatchResult> {
    let mut remaining: Vec<Option<MatchResult>> = results.into_iter().map(Some).collect();
    let mut reranked = Vec::with_capacity(remaining.len());

    for entry in entries {
        let found = remaining
            .iter_mut()
            .find(|slot| {
                slot.as_ref()
                    .is_some_and(|result| result.center.id == entry.center_id)
            })
            .and_then(Option::take);
        if let Some(mut result) = found {
            if let Some(score) = entry.match_score {
                result.match_score = DeterministicMatcher::clamp_score(score);
            }
            if let Some(reason) = &entry.reason {
                result.reason.clone_from(reason);
            }
            reranked.push(result);
        }
    }

    reranked.extend(remaining.into_iter().flatten());
    reranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use givewear_core::test_support::{open_shelter, tshirt};
    use rstest::rstest;

    fn result(id: &str, score: u8) -> MatchResult {
        MatchResult {
            center: open_shelter(id),
            match_score: score,
            matched_items: vec![tshirt(1)],
            reason: format!("deterministic reason for {id}"),
            distance_km: None,
        }
    }

    fn entry(id: &str) -> RankEntry {
        RankEntry {
            center_id: id.to_owned(),
            match_score: None,
            reason: None,
        }
    }

    #[rstest]
    fn reorders_known_ids_and_appends_the_rest() {
        let results = vec![result("a", 90), result("b", 80), result("c", 70)];
        let reranked = apply_rankings(results, &[entry("c"), entry("a")]);
        let ids: Vec<_> = reranked.iter().map(|r| r.center.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[rstest]
    fn unknown_ids_are_ignored() {
        let results = vec![result("a", 90)];
        let reranked = apply_rankings(results, &[entry("ghost"), entry("a")]);
        assert_eq!(reranked.len(), 1);
        assert_eq!(reranked[0].center.id, "a");
    }

    #[rstest]
    fn replacement_scores_are_clamped() {
        let results = vec![result("a", 90)];
        let mut rank = entry("a");
        rank.match_score = Some(400.0);
        let reranked = apply_rankings(results, &[rank]);
        assert_eq!(reranked[0].match_score, 100);
    }

    #[rstest]
    fn missing_fields_keep_deterministic_values() {
        let results = vec![result("a", 90)];
        let reranked = apply_rankings(results, &[entry("a")]);
        assert_eq!(reranked[0].match_score, 90);
        assert_eq!(reranked[0].reason, "deterministic reason for a");
    }

    #[rstest]
    fn replacement_reason_is_applied() {
        let results = vec![result("a", 90)];
        let mut rank = entry("a");
        rank.reason = Some("rewritten".into());
        let reranked = apply_rankings(results, &[rank]);
        assert_eq!(reranked[0].reason, "rewritten");
    }

    #[rstest]
    fn duplicate_entries_do_not_duplicate_results() {
        let results = vec![result("a", 90), result("b", 80)];
        let reranked = apply_rankings(results, &[entry("a"), entry("a")]);
        assert_eq!(reranked.len(), 2);
    }

    #[rstest]
    fn deserialises_a_success_response() {
        let json = r#"{
            "code": "ok",
            "rankings": [{"centerId": "a", "matchScore": 88.0, "reason": "closest fit"}]
        }"#;
        let response: RankResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_ok());
        let rankings = response.rankings.unwrap();
        assert_eq!(rankings[0].center_id, "a");
        assert_eq!(rankings[0].match_score, Some(88.0));
    }

    #[rstest]
    fn deserialises_an_error_response() {
        let json = r#"{"code": "overloaded", "message": "try again"}"#;
        let response: RankResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.message.as_deref(), Some("try again"));
        assert!(response.rankings.is_none());
    }
}
