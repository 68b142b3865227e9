//! Tests for chart normalization

use super::*;
use crate::api::RawChart;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const CDN: &str = "https://datawrapper.dwcdn.net";

fn raw(value: serde_json::Value) -> RawChart {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Categories
// ============================================================================

#[test_case(Some("d3-bars-stacked"), ChartCategory::Bar ; "stacked bars")]
#[test_case(Some("d3-maps-choropleth"), ChartCategory::Map ; "choropleth")]
#[test_case(Some("locator-map"), ChartCategory::Map ; "locator map")]
#[test_case(Some("d3-lines"), ChartCategory::Line ; "lines")]
#[test_case(Some("d3-area"), ChartCategory::Line ; "area")]
#[test_case(Some("tables"), ChartCategory::Table ; "tables")]
#[test_case(Some("d3-dot-plot"), ChartCategory::Scatter ; "dot plot")]
#[test_case(Some("election-donut-chart"), ChartCategory::Pie ; "election donut")]
#[test_case(Some("line"), ChartCategory::Line ; "type contained in key")]
#[test_case(Some("unknown-xyz"), ChartCategory::Other ; "unknown type")]
#[test_case(Some(""), ChartCategory::Other ; "empty type")]
#[test_case(None, ChartCategory::Other ; "missing type")]
fn test_category_for_type(chart_type: Option<&str>, expected: ChartCategory) {
    assert_eq!(category_for_type(chart_type), expected);
}

#[test]
fn test_category_first_match_wins() {
    // "d3" is contained in the first entry, "d3-maps"
    assert_eq!(category_for_type(Some("d3")), ChartCategory::Map);
}

#[test]
fn test_category_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ChartCategory::Scatter).unwrap(), json!("scatter"));
    assert_eq!(ChartCategory::Other.to_string(), "other");
}

// ============================================================================
// Thumbnails
// ============================================================================

#[test]
fn test_thumbnail_charts_path() {
    let chart = raw(json!({"publicId": "42", "publicUrl": "https://x.example/charts/42/3/"}));
    assert_eq!(
        thumbnail_url(&chart, "42", CDN),
        "https://x.example/charts/42/full.png"
    );
}

#[test]
fn test_thumbnail_versioned_path() {
    let chart = raw(json!({"publicId": "42", "publicUrl": "https://dwcdn.net/42/3/"}));
    assert_eq!(
        thumbnail_url(&chart, "42", CDN),
        "https://dwcdn.net/42/3/full.png"
    );

    let chart = raw(json!({"publicId": "42", "publicUrl": "https://dwcdn.net/42/3"}));
    assert_eq!(
        thumbnail_url(&chart, "42", CDN),
        "https://dwcdn.net/42/3/full.png"
    );
}

#[test]
fn test_thumbnail_fallback_template() {
    let chart = raw(json!({"id": "abc", "publicVersion": 2}));
    assert_eq!(
        thumbnail_url(&chart, "abc", CDN),
        "https://datawrapper.dwcdn.net/abc/2/full.png"
    );

    let chart = raw(json!({"id": "abc"}));
    assert_eq!(
        thumbnail_url(&chart, "abc", "https://cdn.example.com/"),
        "https://cdn.example.com/abc/1/full.png"
    );
}

#[test]
fn test_thumbnail_unparseable_url_falls_back() {
    let chart = raw(json!({"id": "abc", "publicUrl": "not a url", "publicVersion": 4}));
    assert_eq!(
        thumbnail_url(&chart, "abc", CDN),
        "https://datawrapper.dwcdn.net/abc/4/full.png"
    );
}

// ============================================================================
// Transformer
// ============================================================================

#[test]
fn test_transform_full_record() {
    let chart = raw(json!({
        "id": "internal",
        "publicId": "Ab1Cd",
        "title": "Rents",
        "type": "d3-bars-stacked",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "publishedAt": "2024-01-02T00:00:00.000Z",
        "lastModifiedAt": "2024-01-03T00:00:00.000Z",
        "publicUrl": "https://datawrapper.dwcdn.net/Ab1Cd/2/",
        "authorId": 99,
        "teamId": "desk",
        "metadata": {"describe": {"intro": "Up again", "source-name": "Census", "byline": "Kim"}}
    }));

    let normalized = ChartTransformer::new(CDN).transform(&chart);

    assert_eq!(
        normalized,
        NormalizedChart {
            id: "Ab1Cd".to_string(),
            title: "Rents".to_string(),
            chart_type: "d3-bars-stacked".to_string(),
            category: ChartCategory::Bar,
            published_at: Some("2024-01-03T00:00:00.000Z".to_string()),
            public_url: "https://datawrapper.dwcdn.net/Ab1Cd/2/".to_string(),
            thumbnail_url: "https://datawrapper.dwcdn.net/Ab1Cd/2/full.png".to_string(),
            description: "Up again".to_string(),
            source: "Census".to_string(),
            byline: "Kim".to_string(),
            author_id: Some("99".to_string()),
            organization_id: Some("desk".to_string()),
        }
    );
}

#[test]
fn test_transform_defaults() {
    let chart = raw(json!({"id": "x9", "title": "", "createdAt": "2024-05-01T00:00:00Z"}));

    let normalized = ChartTransformer::new(CDN).transform(&chart);

    assert_eq!(normalized.id, "x9");
    assert_eq!(normalized.title, UNTITLED);
    assert_eq!(normalized.chart_type, UNKNOWN_TYPE);
    assert_eq!(normalized.category, ChartCategory::Other);
    assert_eq!(normalized.public_url, "https://datawrapper.dwcdn.net/x9/");
    assert_eq!(
        normalized.thumbnail_url,
        "https://datawrapper.dwcdn.net/x9/1/full.png"
    );
    assert_eq!(normalized.description, "");
    assert_eq!(normalized.source, "");
    assert_eq!(normalized.byline, "");
    assert_eq!(normalized.author_id, None);
    assert_eq!(normalized.organization_id, None);
}

#[test]
fn test_transform_organization_preferred_over_team() {
    let chart = raw(json!({"id": "a", "organizationId": "org", "teamId": "team"}));
    let normalized = ChartTransformer::new(CDN).transform(&chart);
    assert_eq!(normalized.organization_id.as_deref(), Some("org"));
}

#[test]
fn test_transform_is_deterministic() {
    let chart = raw(json!({
        "publicId": "p",
        "type": "d3-pies",
        "publishedAt": "2024-02-02T00:00:00Z",
        "publicVersion": 5
    }));
    let transformer = ChartTransformer::new(CDN);

    assert_eq!(transformer.transform(&chart), transformer.transform(&chart));
}

#[test]
fn test_timestamp_precedence() {
    let transformer = ChartTransformer::new(CDN);

    let only_created = raw(json!({"id": "a", "createdAt": "2024-01-01T00:00:00Z"}));
    assert_eq!(
        transformer.transform(&only_created).published_at.as_deref(),
        Some("2024-01-01T00:00:00Z")
    );

    let published_and_created = raw(json!({
        "id": "b",
        "createdAt": "2024-01-01T00:00:00Z",
        "publishedAt": "2024-01-05T00:00:00Z"
    }));
    assert_eq!(
        transformer
            .transform(&published_and_created)
            .published_at
            .as_deref(),
        Some("2024-01-05T00:00:00Z")
    );

    let none = raw(json!({"id": "c"}));
    assert_eq!(transformer.transform(&none).published_at, None);
}

#[test]
fn test_transform_dated_drops_undated() {
    let charts = vec![
        raw(json!({"id": "created", "createdAt": "2024-01-01T00:00:00Z"})),
        raw(json!({"id": "undated"})),
        raw(json!({"id": "modified", "lastModifiedAt": "2024-01-02T00:00:00Z"})),
        raw(json!({"id": "empty", "publishedAt": ""})),
    ];

    let dated = ChartTransformer::new(CDN).transform_dated(&charts);
    let ids: Vec<&str> = dated.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(ids, vec!["created", "modified"]);
}

#[test]
fn test_normalized_serialization_shape() {
    let chart = raw(json!({"id": "a", "type": "tables", "publishedAt": "2024-01-01T00:00:00Z"}));
    let value = serde_json::to_value(ChartTransformer::new(CDN).transform(&chart)).unwrap();

    assert_eq!(value["type"], "tables");
    assert_eq!(value["category"], "table");
    assert_eq!(value["publishedAt"], "2024-01-01T00:00:00Z");
    assert_eq!(value["thumbnailUrl"], "https://datawrapper.dwcdn.net/a/1/full.png");
    assert!(value.get("authorId").is_none());
}
