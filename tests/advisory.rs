//! End-to-end advisory pipeline scenarios against the public API.

use chrono::{DateTime, TimeZone, Utc};
use sdk_advisor::advisor::index::SdkIndex;
use sdk_advisor::{
    AdvisorConfig, ParsedVersion, RawObservation, SuggestionKind, build_advisory, reduce,
};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_756_000_000 + secs, 0).unwrap()
}

fn raw(project_id: u64, sdk_name: &str, sdk_version: &str, secs: i64) -> RawObservation {
    RawObservation {
        project_id: Some(project_id),
        sdk_name: Some(sdk_name.to_string()),
        sdk_version: Some(sdk_version.to_string()),
        last_seen: Some(at(secs)),
    }
}

#[test]
fn reduction_picks_the_numerically_latest_version() {
    let reduction = reduce(vec![
        raw(1, "sentry.python", "0.9.0", 0),
        raw(1, "sentry.python", "1.0.0", 1),
        raw(1, "sentry.python", "0.9.5", 2),
    ]);

    assert_eq!(reduction.states.len(), 1);
    assert_eq!(reduction.states[0].version, "1.0.0");
    assert_eq!(reduction.states[0].parsed, ParsedVersion::parse("1.0.0"));
}

#[tokio::test]
async fn outdated_sdk_gets_exactly_one_update_suggestion() {
    let index = SdkIndex::new().with_sdk("sentry.python", &["1.0.0", "1.2.0"], &[]);

    let advisory = build_advisory(
        &[1],
        vec![raw(1, "sentry.python", "1.0.0", 0)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    let suggestions = &advisory.projects[&1];
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::UpdateSdk);
    assert_eq!(
        suggestions[0].target_version,
        Some(ParsedVersion::parse("1.2.0"))
    );
}

#[tokio::test]
async fn up_to_date_sdk_gets_no_suggestions() {
    let index = SdkIndex::new().with_sdk("sentry.python", &["1.0.0", "1.2.0"], &[]);

    let advisory = build_advisory(
        &[1],
        vec![raw(1, "sentry.python", "1.2.0", 0)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    assert!(advisory.projects[&1].is_empty());
}

#[tokio::test]
async fn sdk_unknown_to_the_index_is_not_penalized() {
    let index = SdkIndex::new();

    let advisory = build_advisory(
        &[1],
        vec![raw(1, "internal.custom-sdk", "0.1.0", 0)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    assert!(advisory.projects[&1].is_empty());
    assert!(advisory.partial_data().is_none());
}

#[tokio::test]
async fn deprecated_current_version_is_flagged_with_a_replacement() {
    let index = SdkIndex::new().with_sdk(
        "sentry.javascript.browser",
        &["7.0.0", "7.0.1"],
        &["7.0.1"],
    );

    // 7.0.1 is the latest by number but was pulled; the advisory should still
    // recommend moving off it even though nothing is newer.
    let advisory = build_advisory(
        &[1],
        vec![raw(1, "sentry.javascript.browser", "7.0.1", 0)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    let suggestions = &advisory.projects[&1];
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::UpdateSdk);
    assert!(suggestions[0].target_version.is_none());
}

#[tokio::test]
async fn projects_without_observations_still_appear_with_empty_lists() {
    let index = SdkIndex::new().with_sdk("sentry.python", &["1.0.0", "2.0.0"], &[]);

    let advisory = build_advisory(
        &[1, 2, 3],
        vec![raw(2, "sentry.python", "1.0.0", 0)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    let keys: Vec<u64> = advisory.projects.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);
    assert!(advisory.projects[&1].is_empty());
    assert_eq!(advisory.projects[&2].len(), 1);
    assert!(advisory.projects[&3].is_empty());
}

#[tokio::test]
async fn malformed_rows_are_dropped_while_valid_ones_still_evaluate() {
    let index = SdkIndex::new().with_sdk("sentry.python", &["1.0.0", "1.2.0"], &[]);

    let mut missing_last_seen = raw(1, "sentry.python", "1.1.0", 0);
    missing_last_seen.last_seen = None;

    let advisory = build_advisory(
        &[1],
        vec![missing_last_seen, raw(1, "sentry.python", "1.0.0", 1)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    let partial = advisory.partial_data().expect("partial data expected");
    assert_eq!(partial.dropped, 1);

    let suggestions = &advisory.projects[&1];
    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        suggestions[0].target_version,
        Some(ParsedVersion::parse("1.2.0"))
    );
}

#[tokio::test]
async fn advisory_serializes_to_the_expected_response_shape() {
    let index = SdkIndex::new().with_sdk("sentry.python", &["1.0.0", "1.2.0"], &[]);

    let advisory = build_advisory(
        &[1, 2],
        vec![raw(1, "sentry.python", "1.0.0", 0)],
        &index,
        &AdvisorConfig::default(),
    )
    .await;

    let json = serde_json::to_value(&advisory).unwrap();
    assert_eq!(json["projects"]["1"][0]["type"], "update-sdk");
    assert_eq!(json["projects"]["1"][0]["target_version"], "1.2.0");
    assert_eq!(json["projects"]["2"], serde_json::json!([]));
    assert_eq!(json["dropped_observations"], 0);
}

#[tokio::test]
async fn fixture_roundtrip_through_serde_matches_manual_construction() {
    let observations: Vec<RawObservation> = serde_json::from_str(
        r#"[
            {"project.id": 1, "sdk.name": "sentry.python", "sdk.version": "0.9.0",
             "last_seen()": "2026-08-28T10:00:00Z"},
            {"project.id": 1, "sdk.name": "sentry.python", "sdk.version": "1.0.0",
             "last_seen()": "2026-08-28T11:00:00Z"}
        ]"#,
    )
    .unwrap();
    let index: SdkIndex = serde_json::from_str(
        r#"{"sentry.python": {"versions": ["1.0.0", "1.2.0"], "deprecated": []}}"#,
    )
    .unwrap();

    let advisory = build_advisory(&[1], observations, &index, &AdvisorConfig::default()).await;

    assert_eq!(advisory.projects[&1].len(), 1);
    assert_eq!(
        advisory.projects[&1][0].target_version,
        Some(ParsedVersion::parse("1.2.0"))
    );
}
