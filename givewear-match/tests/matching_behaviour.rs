//! End-to-end behaviour of the deterministic matching pipeline.

use givewear_core::test_support::{
    FailingCenterStore, at, care_home, open_shelter, orphanage, tshirt, winter_coat,
};
use givewear_core::{
    ClothingItem, Condition, InMemoryCenterStore, MatchRequest, Matcher, RecipientCategory, Season,
    StoreError,
};
use givewear_match::{DEFAULT_LIMIT, DeterministicMatcher, MatchError, find_matches};
use rstest::rstest;

fn donor_request(items: Vec<ClothingItem>) -> MatchRequest {
    // Donor in central London.
    MatchRequest::new(items).with_donor_location(51.5074, -0.1278)
}

#[rstest]
fn inactive_centers_never_appear_in_results() {
    let store = InMemoryCenterStore::new(vec![orphanage("open"), orphanage("closed").inactive()]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(vec![tshirt(1)]),
        None,
    )
    .unwrap();
    assert_eq!(response.matches.len(), 1);
    assert_eq!(response.matches[0].center.id, "open");
}

#[rstest]
fn disjoint_needs_never_produce_matched_items() {
    // A children's summer t-shirt is disjoint from the care home's needs on
    // every dimension.
    let store = InMemoryCenterStore::new(vec![care_home("c1")]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(vec![tshirt(1)]),
        None,
    )
    .unwrap();
    assert!(response.matches.is_empty());
}

#[rstest]
fn scores_stay_within_bounds() {
    let store = InMemoryCenterStore::new(vec![
        orphanage("a"),
        open_shelter("b"),
        care_home("c"),
    ]);
    let items = vec![tshirt(50), winter_coat(50)];
    let response =
        find_matches(&store, &DeterministicMatcher, &MatchRequest::new(items), None).unwrap();
    assert!(!response.matches.is_empty());
    for result in &response.matches {
        assert!(result.match_score <= 100);
    }
}

#[rstest]
fn results_are_sorted_by_score_then_distance() {
    let store = InMemoryCenterStore::new(vec![
        at(orphanage("far"), -0.2000, 51.55),
        at(orphanage("near"), -0.1300, 51.51),
        open_shelter("unlocated"),
    ]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &donor_request(vec![tshirt(3)]),
        None,
    )
    .unwrap();

    for pair in response.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
        if pair[0].match_score == pair[1].match_score {
            match (pair[0].distance_km, pair[1].distance_km) {
                (Some(a), Some(b)) => assert!(a <= b),
                (None, Some(_)) => panic!("unknown distance ranked before known on a tie"),
                _ => {}
            }
        }
    }
}

#[rstest]
fn equal_scores_rank_the_closer_center_first() {
    // Identical needs profiles guarantee identical scores; only distance
    // separates the two centers.
    let store = InMemoryCenterStore::new(vec![
        at(orphanage("five-km-away"), -0.0555, 51.5074),
        at(orphanage("two-km-away"), -0.0989, 51.5074),
    ]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &donor_request(vec![tshirt(1)]),
        None,
    )
    .unwrap();

    assert_eq!(response.matches.len(), 2);
    assert_eq!(
        response.matches[0].match_score,
        response.matches[1].match_score
    );
    assert_eq!(response.matches[0].center.id, "two-km-away");
}

#[rstest]
fn distance_is_annotated_only_when_both_positions_are_known() {
    let store = InMemoryCenterStore::new(vec![
        at(orphanage("located"), -0.13, 51.51),
        orphanage("unlocated"),
    ]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &donor_request(vec![tshirt(1)]),
        None,
    )
    .unwrap();

    for result in &response.matches {
        match result.center.id.as_str() {
            "located" => assert!(result.distance_km.is_some()),
            _ => assert!(result.distance_km.is_none()),
        }
    }
}

#[rstest]
fn no_donor_position_means_no_distances() {
    let store = InMemoryCenterStore::new(vec![at(orphanage("located"), -0.13, 51.51)]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(vec![tshirt(1)]),
        None,
    )
    .unwrap();
    assert!(response.matches[0].distance_km.is_none());
}

#[rstest]
fn globally_unknown_type_yields_an_empty_list() {
    // A men's summer garment in fair condition: no center accepts the type,
    // and no center's remaining dimensions clear the threshold.
    let item = ClothingItem::new(
        "kimono",
        RecipientCategory::Men,
        Season::Summer,
        Condition::Fair,
        1,
    );
    let store = InMemoryCenterStore::new(vec![orphanage("a"), care_home("b")]);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(vec![item]),
        None,
    )
    .unwrap();
    assert!(response.matches.is_empty());
}

#[rstest]
fn all_season_wildcard_matches_every_item_season() {
    let store = InMemoryCenterStore::new(vec![open_shelter("c1")]);
    for item in [
        tshirt(1),
        winter_coat(1),
        ClothingItem::new(
            "scarf",
            RecipientCategory::Unisex,
            Season::AllSeason,
            Condition::Good,
            1,
        ),
    ] {
        let response = find_matches(
            &store,
            &DeterministicMatcher,
            &MatchRequest::new(vec![item]),
            None,
        )
        .unwrap();
        assert_eq!(response.matches.len(), 1);
    }
}

#[rstest]
fn limit_truncates_the_result_list() {
    let centers: Vec<_> = (0..8).map(|i| orphanage(&format!("c{i}"))).collect();
    let store = InMemoryCenterStore::new(centers);
    let response = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(vec![tshirt(1)]),
        Some(DEFAULT_LIMIT),
    )
    .unwrap();
    assert_eq!(response.matches.len(), DEFAULT_LIMIT);
}

#[rstest]
fn the_pipeline_is_idempotent() {
    let store = InMemoryCenterStore::new(vec![orphanage("a"), open_shelter("b"), care_home("c")]);
    let request = donor_request(vec![tshirt(2), winter_coat(3)]);
    let first = find_matches(&store, &DeterministicMatcher, &request, None).unwrap();
    let second = find_matches(&store, &DeterministicMatcher, &request, None).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn empty_item_lists_are_rejected_before_scoring() {
    let store = InMemoryCenterStore::new(vec![orphanage("a")]);
    let err = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(Vec::new()),
        None,
    )
    .unwrap_err();
    assert_eq!(err, MatchError::NoItems);
}

#[rstest]
#[case(StoreError::RateLimited)]
#[case(StoreError::QuotaExhausted)]
#[case(StoreError::Unavailable { message: "boom".into() })]
fn store_failures_propagate_as_recoverable_errors(#[case] failure: StoreError) {
    let store = FailingCenterStore(failure.clone());
    let err = find_matches(
        &store,
        &DeterministicMatcher,
        &MatchRequest::new(vec![tshirt(1)]),
        None,
    )
    .unwrap_err();
    assert_eq!(err, MatchError::Store(failure));
}

#[rstest]
fn recommend_matches_find_matches_for_the_same_input() {
    // The store-backed entry point adds fetching and validation only; the
    // ranking itself is the strategy's.
    let centers = vec![orphanage("a"), open_shelter("b")];
    let store = InMemoryCenterStore::new(centers.clone());
    let request = donor_request(vec![tshirt(2)]);
    let via_pipeline = find_matches(&store, &DeterministicMatcher, &request, None).unwrap();
    let direct =
        DeterministicMatcher.recommend(&request.items, &centers, request.donor_location(), None);
    assert_eq!(via_pipeline.matches, direct);
}
