//! Tests for thumbnail validation

use super::*;
use crate::transform::{ChartCategory, NormalizedChart};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Probe answering from a fixed set and recording the order of calls
struct SetProbe {
    present: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl SetProbe {
    fn new(present: &[&str]) -> Self {
        Self {
            present: present.iter().map(|s| (*s).to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ThumbnailProbe for SetProbe {
    async fn exists(&self, url: &str) -> bool {
        self.calls.lock().unwrap().push(url.to_string());
        self.present.contains(url)
    }
}

fn chart(id: &str, thumbnail_url: &str) -> NormalizedChart {
    NormalizedChart {
        id: id.to_string(),
        title: id.to_string(),
        chart_type: "d3-lines".to_string(),
        category: ChartCategory::Line,
        published_at: Some("2024-01-01T00:00:00Z".to_string()),
        public_url: format!("https://example.com/{id}/"),
        thumbnail_url: thumbnail_url.to_string(),
        description: String::new(),
        source: String::new(),
        byline: String::new(),
        author_id: None,
        organization_id: None,
    }
}

#[tokio::test]
async fn test_validate_keeps_reachable_in_order() {
    let probe = SetProbe::new(&["https://t/a.png", "https://t/c.png"]);
    let charts = vec![
        chart("a", "https://t/a.png"),
        chart("b", "https://t/b.png"),
        chart("c", "https://t/c.png"),
        chart("d", "https://t/d.png"),
    ];

    let outcome = validate_thumbnails(charts, &probe).await;

    let ids: Vec<&str> = outcome.valid.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(
        *probe.calls.lock().unwrap(),
        vec![
            "https://t/a.png",
            "https://t/b.png",
            "https://t/c.png",
            "https://t/d.png"
        ]
    );
}

#[tokio::test]
async fn test_validate_empty_input() {
    let probe = SetProbe::new(&[]);
    let outcome = validate_thumbnails(Vec::new(), &probe).await;
    assert_eq!(outcome, ValidationOutcome::default());
}

#[tokio::test]
async fn test_http_probe_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/ok/1/full.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/gone/1/full.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/broken/1/full.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let probe = HttpThumbnailProbe::new(Duration::from_secs(5)).unwrap();
    let base = mock_server.uri();

    assert!(probe.exists(&format!("{base}/ok/1/full.png")).await);
    assert!(!probe.exists(&format!("{base}/gone/1/full.png")).await);
    assert!(!probe.exists(&format!("{base}/broken/1/full.png")).await);
}

#[tokio::test]
async fn test_http_probe_network_failure_is_false() {
    let probe = HttpThumbnailProbe::new(Duration::from_millis(500)).unwrap();

    assert!(!probe.exists("http://127.0.0.1:1/none/full.png").await);
    assert!(!probe.exists("not a url").await);
}
