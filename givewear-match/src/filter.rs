//! Pre-filter of plausible candidate centers.
//!
//! Scoring every center wastes work on obviously irrelevant ones. The filter
//! keeps a center when at least one item overlaps its needs on at least one
//! dimension. OR semantics are deliberately looser than the scorer's
//! qualifying threshold, so the filter never discards a center the scorer
//! would accept.

use givewear_core::{ClothingItem, DonationCenter, NeedsProfile};

fn any_overlap(item: &ClothingItem, needs: &NeedsProfile) -> bool {
    needs.accepts_type(&item.item_type)
        || needs.accepts_gender(item.recipient)
        || needs.accepts_season(item.season)
}

/// Centers with any plausible relevance to the donated items.
///
/// Inactive centers are dropped here as a second line of defence; the store
/// already excludes them upstream.
#[must_use]
pub fn relevant_candidates<'a>(
    items: &[ClothingItem],
    centers: &'a [DonationCenter],
) -> Vec<&'a DonationCenter> {
    centers
        .iter()
        .filter(|center| {
            center.is_active && items.iter().any(|item| any_overlap(item, &center.needs))
        })
        .collect()
}
