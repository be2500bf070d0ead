use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use lumen_core::models::*;

#[test]
fn user_defaults_optional_fields_at_ingestion() {
    let user: User = serde_json::from_str(r#"{"_id": "u1", "firstName": "Jordan"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.first_name, "Jordan");
    assert_eq!(user.bio, "");
    assert_eq!(user.company_name, "");
    assert_eq!(user.trust_score, 0.0);
    assert!(user.is_searchable(), "showInSearch defaults to true");
}

#[test]
fn user_privacy_opt_out_is_honored() {
    let user: User = serde_json::from_str(
        r#"{"id": "u2", "name": "Jordan Lee", "privacySettings": {"showInSearch": false}}"#,
    )
    .unwrap();
    assert!(!user.is_searchable());
}

#[test]
fn user_privacy_settings_without_flag_default_to_visible() {
    let user: User =
        serde_json::from_str(r#"{"id": "u3", "privacySettings": {}}"#).unwrap();
    assert!(user.is_searchable());
}

#[test]
fn display_name_falls_back_to_first_and_last() {
    let user: User =
        serde_json::from_str(r#"{"id": "u4", "firstName": "Ada", "lastName": "Byron"}"#).unwrap();
    assert_eq!(user.display_name(), "Ada Byron");
}

#[test]
fn post_accepts_created_at_alias() {
    let post: Post = serde_json::from_str(
        r#"{"_id": "p1", "content": "hi", "createdAt": "2026-01-02T03:04:05Z"}"#,
    )
    .unwrap();
    assert_eq!(post.timestamp, Some(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()));
    assert!(post.hashtags.is_empty());
    assert_eq!(post.radiance, 0.0);
}

#[test]
fn unknown_ad_status_decodes_as_unknown() {
    let ad: Ad = serde_json::from_str(r#"{"id": "a1", "status": "archived"}"#).unwrap();
    assert_eq!(ad.status, AdStatus::Unknown);
    assert!(!ad.is_active());
}

#[test]
fn trend_count_defaults_missing_and_null_fields() {
    let response: TrendingResponse = serde_json::from_str(
        r#"{"success": true, "data": [{"_id": "rust"}, {"count": 4}, {"_id": null, "count": null}]}"#,
    )
    .unwrap();
    assert!(response.success);
    assert_eq!(response.data[0], TrendCount { id: "rust".into(), count: 0 });
    assert_eq!(response.data[1], TrendCount { id: String::new(), count: 4 });
    assert_eq!(response.data[2], TrendCount::default());
}

#[test]
fn trend_counts_tolerate_malformed_elements() {
    let response: TrendingResponse = serde_json::from_str(
        r#"{"success": true, "data": [
            {"_id": "rust", "count": 5},
            {"_id": "go", "count": 7.0},
            {"_id": "zig", "count": "12"},
            {"_id": "cobol", "count": -4},
            {"_id": 2024, "count": 3},
            {"_id": "ml", "count": {"n": 1}},
            "not an object",
            {"_id": "ai", "count": 2.6}
        ]}"#,
    )
    .unwrap();
    assert!(response.success);
    let decoded: Vec<(&str, u64)> = response
        .data
        .iter()
        .map(|t| (t.id.as_str(), t.count))
        .collect();
    assert_eq!(
        decoded,
        vec![("rust", 5), ("go", 7), ("zig", 12), ("cobol", 0), ("2024", 3), ("ml", 0), ("ai", 2)]
    );
}

#[test]
fn post_without_timestamp_stays_undated() {
    let post: Post = serde_json::from_str(r#"{"_id": "r1", "content": "leadership notes"}"#).unwrap();
    assert_eq!(post.timestamp, None);

    let garbled: Post =
        serde_json::from_str(r#"{"_id": "r2", "createdAt": "last tuesday"}"#).unwrap();
    assert_eq!(garbled.timestamp, None);
}

#[test]
fn post_accepts_epoch_millis() {
    let post: Post =
        serde_json::from_str(r#"{"_id": "r3", "createdAt": 1700000000000}"#).unwrap();
    assert_eq!(post.timestamp, Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()));
}

#[test]
fn remote_posts_keep_good_elements() {
    let response: RemotePosts = serde_json::from_str(
        r#"{"success": true, "posts": [
            {"_id": "r1", "content": "a", "createdAt": 1700000000000},
            {"content": "no id"},
            {"_id": "r2", "content": "b", "createdAt": "2026-01-02T03:04:05Z"}
        ]}"#,
    )
    .unwrap();
    let ids: Vec<&str> = response.posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
}

#[test]
fn missing_success_reads_as_unsuccessful() {
    let response: RemotePosts = serde_json::from_str(r#"{"posts": []}"#).unwrap();
    assert!(!response.success);
}

#[test]
fn normalize_hashtag_strips_hash_and_lowercases() {
    assert_eq!(normalize_hashtag("#Growth"), "growth");
    assert_eq!(normalize_hashtag("  ##AI "), "ai");
    assert_eq!(normalize_hashtag("rust"), "rust");
}

#[test]
fn category_bonuses() {
    assert_eq!(TrendCategory::Rising.rank_bonus(), 5.0);
    assert_eq!(TrendCategory::Hot.rank_bonus(), 3.0);
    assert_eq!(TrendCategory::Steady.rank_bonus(), 1.0);
    assert_eq!(serde_json::to_string(&TrendCategory::Hot).unwrap(), "\"hot\"");
}

#[test]
fn filters_parse_from_wire_names() {
    assert_eq!("posts".parse::<SearchKind>().unwrap(), SearchKind::Posts);
    assert_eq!("Week".parse::<DateRange>().unwrap(), DateRange::Week);
    assert_eq!("popularity".parse::<SortBy>().unwrap(), SortBy::Popularity);
    assert!("fortnight".parse::<DateRange>().is_err());
    assert_eq!(SortBy::Date.to_string(), "date");
}

#[test]
fn filters_deserialize_with_defaults() {
    let filters: SearchFilters = serde_json::from_str(r#"{"type": "users"}"#).unwrap();
    assert_eq!(filters.kind, SearchKind::Users);
    assert_eq!(filters.date_range, DateRange::All);
    assert_eq!(filters.sort_by, SortBy::Relevance);
}

#[test]
fn date_range_spans() {
    assert!(DateRange::All.span().is_none());
    assert_eq!(DateRange::Today.span().unwrap().num_hours(), 24);
    assert_eq!(DateRange::Week.span().unwrap().num_days(), 7);
    assert_eq!(DateRange::Month.span().unwrap().num_days(), 30);
    assert_eq!(DateRange::Year.span().unwrap().num_days(), 365);
}

#[test]
fn search_result_serializes_with_type_discriminant() {
    let result = SearchResult {
        id: "growth".into(),
        title: "#growth".into(),
        description: "3 posts".into(),
        relevance: 10.5,
        matched_fields: BTreeSet::from([MatchedField::Hashtag]),
        payload: ResultPayload::Hashtag(HashtagSummary {
            tag: "growth".into(),
            count: 3,
        }),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "hashtag");
    assert_eq!(json["data"]["count"], 3);
    assert_eq!(json["matchedFields"][0], "hashtag");
    assert_eq!(result.kind(), ResultKind::Hashtag);
}

#[test]
fn payload_popularity_and_timestamp() {
    let ad = ResultPayload::Ad(Ad {
        id: "a".into(),
        headline: String::new(),
        description: String::new(),
        owner_name: String::new(),
        hashtags: vec![],
        cta_text: String::new(),
        status: AdStatus::Active,
    });
    assert_eq!(ad.popularity(), 0.0);
    assert!(ad.timestamp().is_none());
}
