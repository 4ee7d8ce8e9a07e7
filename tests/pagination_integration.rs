//! Integration tests for page-at-a-time navigation and full collection

use async_trait::async_trait;
use avis_cli::api::{Feedback, Page, PageSource, Paginator, collect_all};
use serde_json::json;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Mutex;

/// In-memory list endpoint that records every URL it is asked for
struct FakeSource {
    pages: HashMap<String, Page<Feedback>>,
    fetched: Mutex<Vec<String>>,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    fn with_page(
        mut self,
        url: &str,
        ids: Range<u64>,
        next: Option<&str>,
        previous: Option<&str>,
        count: u64,
    ) -> Self {
        let results: Vec<Feedback> = ids
            .map(|id| {
                serde_json::from_value(json!({"id": id, "note": 4, "date_submitted": "2024-01-01"}))
                    .unwrap()
            })
            .collect();
        self.pages.insert(
            url.to_string(),
            Page {
                results,
                next: next.map(String::from),
                previous: previous.map(String::from),
                count,
            },
        );
        self
    }

    fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource<Feedback> for FakeSource {
    async fn fetch_page(&self, url: &str) -> anyhow::Result<Page<Feedback>> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 for {}", url))
    }
}

const FIRST: &str = "/api/avis/full/";
const SECOND: &str = "/api/avis/full/?page=2";
const THIRD: &str = "/api/avis/full/?page=3";

fn three_pages() -> FakeSource {
    FakeSource::new()
        .with_page(FIRST, 1..11, Some(SECOND), None, 25)
        .with_page(SECOND, 11..21, Some(THIRD), Some(FIRST), 25)
        .with_page(THIRD, 21..26, None, Some(SECOND), 25)
}

fn ids(records: &[Feedback]) -> Vec<u64> {
    records.iter().map(|f| f.id).collect()
}

/// Navigating to `next` fetches that URL and replaces the held records
#[tokio::test]
async fn test_next_replaces_records() {
    let source = three_pages();
    let mut paginator: Paginator<Feedback> = Paginator::new(FIRST);

    paginator.load(&source).await;
    assert_eq!(paginator.records().len(), 10);
    assert_eq!(paginator.next(), Some(SECOND));
    assert_eq!(paginator.count(), 25);
    assert!(!paginator.is_loading());

    assert!(paginator.next_page(&source).await);

    assert_eq!(ids(paginator.records()), (11..21).collect::<Vec<_>>());
    assert_eq!(paginator.previous(), Some(FIRST));
    assert_eq!(source.fetched(), vec![FIRST.to_string(), SECOND.to_string()]);
}

#[tokio::test]
async fn test_walk_forward_and_back() {
    let source = three_pages();
    let mut paginator: Paginator<Feedback> = Paginator::new(FIRST);
    paginator.load(&source).await;

    assert!(paginator.next_page(&source).await);
    assert!(paginator.next_page(&source).await);
    assert_eq!(paginator.records().len(), 5);
    assert!(!paginator.next_page(&source).await);

    assert!(paginator.previous_page(&source).await);
    assert_eq!(paginator.page_url(), SECOND);
    assert_eq!(ids(paginator.records()).first(), Some(&11));
}

/// A failing fetch leaves an empty page rather than an error
#[tokio::test]
async fn test_failed_fetch_resets_to_empty() {
    let source = FakeSource::new().with_page(FIRST, 1..11, Some("/api/avis/full/?page=404"), None, 30);
    let mut paginator: Paginator<Feedback> = Paginator::new(FIRST);
    paginator.load(&source).await;

    assert!(paginator.next_page(&source).await);

    assert!(paginator.records().is_empty());
    assert_eq!(paginator.count(), 0);
    assert!(paginator.next().is_none());
    assert!(paginator.previous().is_none());
}

#[tokio::test]
async fn test_collect_all_follows_next_links() {
    let source = three_pages();

    let records = collect_all(&source, FIRST).await.unwrap();

    assert_eq!(ids(&records), (1..26).collect::<Vec<_>>());
    assert_eq!(source.fetched().len(), 3);
}

#[tokio::test]
async fn test_collect_all_propagates_errors() {
    let source = FakeSource::new().with_page(FIRST, 1..3, Some(SECOND), None, 10);

    let err = collect_all(&source, FIRST).await.unwrap_err();
    assert!(err.to_string().contains(SECOND));
}

#[tokio::test]
async fn test_collect_all_stops_on_link_cycle() {
    let source = FakeSource::new()
        .with_page(FIRST, 1..3, Some(SECOND), None, 4)
        .with_page(SECOND, 3..5, Some(FIRST), Some(FIRST), 4);

    let records = collect_all(&source, FIRST).await.unwrap();
    assert_eq!(records.len(), 4);
}
