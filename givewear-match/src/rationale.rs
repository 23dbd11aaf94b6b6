//! Deterministic rationale generation.
//!
//! Produces a short explanation of why a center scored as it did. No
//! randomness: identical input yields an identical string, which keeps the
//! engine reproducible under test. The AI reranker may replace these
//! sentences; this generator remains the default and the fallback.

use givewear_core::{ClothingItem, DonationCenter, Season};

/// Possessive description of the matched items' recipient categories.
///
/// Returns the shared category's possessive when every matched item agrees,
/// otherwise `"mixed"`.
fn recipient_text(matched: &[ClothingItem]) -> &'static str {
    let mut categories = matched.iter().map(|item| item.recipient);
    match categories.next() {
        Some(first) if categories.all(|category| category == first) => first.possessive(),
        Some(_) => "mixed",
        None => "mixed",
    }
}

/// Dominant season wording, winter taking precedence over summer.
///
/// All-season items carry no seasonal urgency and contribute nothing here.
fn season_text(matched: &[ClothingItem]) -> Option<&'static str> {
    if matched.iter().any(|item| item.season == Season::Winter) {
        Some("winter")
    } else if matched.iter().any(|item| item.season == Season::Summer) {
        Some("summer")
    } else {
        None
    }
}

/// Build the explanation for one scored center.
///
/// References the dominant recipient category, the center's urgency when its
/// priority is high or urgent, the dominant season when one is present, and
/// a human label for the center kind.
#[must_use]
pub fn build_reason(matched: &[ClothingItem], center: &DonationCenter) -> String {
    let mut reason = format!(
        "Your {} clothing donation is a great match!",
        recipient_text(matched)
    );

    if center.needs.priority.is_urgent() {
        reason.push_str(&format!(
            " {} has an urgent need for these items.",
            center.name
        ));
    }

    if let Some(season) = season_text(matched) {
        reason.push_str(&format!(" Your {season} items are especially needed."));
    }

    reason.push_str(&format!(
        " As {}, they will ensure your clothes reach those who need them most.",
        center.kind.human_label()
    ));
    reason
}
