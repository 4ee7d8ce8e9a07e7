//! Paginated collection state
//!
//! `Paginator` holds one page of a server-side paginated list at a time.
//! Loading a page replaces the records; it never accumulates across pages.
//! Fetch failures are logged and reset the state to an empty page.

use super::page::Page;
use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashSet;

/// Anything that can fetch one page of `T` from a page URL
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, url: &str) -> anyhow::Result<Page<T>>;
}

/// Ticket handed out when a fetch starts; only the newest ticket may apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct Paginator<T> {
    initial_url: String,
    page_url: String,
    records: Vec<T>,
    next: Option<String>,
    previous: Option<String>,
    count: u64,
    loading: bool,
    generation: u64,
}

impl<T> Paginator<T> {
    pub fn new(initial_url: impl Into<String>) -> Self {
        let initial_url = initial_url.into();
        Self {
            page_url: initial_url.clone(),
            initial_url,
            records: Vec::new(),
            next: None,
            previous: None,
            count: 0,
            // Nothing has been fetched yet
            loading: true,
            generation: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Point the paginator at another page. Any fetch already in flight for
    /// the previous URL is superseded.
    pub fn set_page_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!("Page URL set to {}", url);
        self.page_url = url;
        self.generation += 1;
    }

    /// Go back to the endpoint the paginator was created with
    pub fn reset(&mut self) {
        let initial = self.initial_url.clone();
        self.set_page_url(initial);
    }

    /// Mark a fetch of the current page URL as started
    pub fn begin_fetch(&mut self) -> PageRequest {
        self.loading = true;
        PageRequest {
            url: self.page_url.clone(),
            generation: self.generation,
        }
    }

    /// Apply the outcome of a fetch. Returns `false` when the request was
    /// superseded by a later `set_page_url` and the outcome was dropped.
    pub fn apply_page(&mut self, request: &PageRequest, outcome: anyhow::Result<Page<T>>) -> bool {
        if request.generation != self.generation {
            debug!("Discarding stale page for {}", request.url);
            return false;
        }

        match outcome {
            Ok(page) => {
                self.records = page.results;
                self.next = page.next;
                self.previous = page.previous;
                self.count = page.count;
            }
            Err(e) => {
                warn!("Failed to fetch page {}: {}", request.url, e);
                self.records = Vec::new();
                self.next = None;
                self.previous = None;
                self.count = 0;
            }
        }
        self.loading = false;
        true
    }

    /// Fetch the current page URL and replace the held page with the result
    pub async fn load<S>(&mut self, source: &S)
    where
        S: PageSource<T> + ?Sized,
    {
        let request = self.begin_fetch();
        let outcome = source.fetch_page(&request.url).await;
        self.apply_page(&request, outcome);
    }

    /// Follow the `next` link. Returns `false` on the last page.
    pub async fn next_page<S>(&mut self, source: &S) -> bool
    where
        S: PageSource<T> + ?Sized,
    {
        match self.next.clone() {
            Some(url) => {
                self.set_page_url(url);
                self.load(source).await;
                true
            }
            None => false,
        }
    }

    /// Follow the `previous` link. Returns `false` on the first page.
    pub async fn previous_page<S>(&mut self, source: &S) -> bool
    where
        S: PageSource<T> + ?Sized,
    {
        match self.previous.clone() {
            Some(url) => {
                self.set_page_url(url);
                self.load(source).await;
                true
            }
            None => false,
        }
    }
}

/// Walk every page starting at `url` and gather all records.
///
/// Unlike `Paginator::load`, errors propagate: a partial collection would
/// silently skew statistics and exports.
pub async fn collect_all<T, S>(source: &S, url: &str) -> anyhow::Result<Vec<T>>
where
    S: PageSource<T> + ?Sized,
{
    let mut records = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(url.to_string());

    while let Some(page_url) = current.take() {
        if !visited.insert(page_url.clone()) {
            warn!("Pagination loop detected at {}, stopping", page_url);
            break;
        }

        let page = source.fetch_page(&page_url).await?;
        debug!("Fetched {} records from {}", page.results.len(), page_url);
        records.extend(page.results);
        current = page.next;
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[u64], next: Option<&str>, previous: Option<&str>, count: u64) -> Page<u64> {
        Page {
            results: ids.to_vec(),
            next: next.map(String::from),
            previous: previous.map(String::from),
            count,
        }
    }

    #[test]
    fn test_new_paginator_is_loading_and_empty() {
        let paginator: Paginator<u64> = Paginator::new("/api/avis/full/");

        assert!(paginator.is_loading());
        assert!(paginator.records().is_empty());
        assert_eq!(paginator.count(), 0);
        assert_eq!(paginator.page_url(), "/api/avis/full/");
    }

    #[test]
    fn test_apply_replaces_records() {
        let mut paginator = Paginator::new("/api/x/");

        let request = paginator.begin_fetch();
        assert!(paginator.apply_page(&request, Ok(page(&[1, 2, 3], Some("/api/x/?page=2"), None, 5))));
        assert_eq!(paginator.records(), &[1, 2, 3]);

        paginator.set_page_url("/api/x/?page=2");
        let request = paginator.begin_fetch();
        assert!(paginator.apply_page(&request, Ok(page(&[4, 5], None, Some("/api/x/"), 5))));

        assert_eq!(paginator.records(), &[4, 5]);
        assert_eq!(paginator.previous(), Some("/api/x/"));
        assert!(paginator.next().is_none());
        assert!(!paginator.is_loading());
    }

    #[test]
    fn test_error_resets_state() {
        let mut paginator = Paginator::new("/api/x/");
        let request = paginator.begin_fetch();
        paginator.apply_page(&request, Ok(page(&[1], Some("/api/x/?page=2"), None, 2)));

        let request = paginator.begin_fetch();
        paginator.apply_page(&request, Err(anyhow::anyhow!("connection refused")));

        assert!(paginator.records().is_empty());
        assert!(paginator.next().is_none());
        assert!(paginator.previous().is_none());
        assert_eq!(paginator.count(), 0);
        assert!(!paginator.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut paginator = Paginator::new("/api/x/");

        let slow = paginator.begin_fetch();
        paginator.set_page_url("/api/x/?page=3");
        let fast = paginator.begin_fetch();

        assert!(paginator.apply_page(&fast, Ok(page(&[30], None, None, 31))));
        assert!(!paginator.apply_page(&slow, Ok(page(&[1], None, None, 31))));

        assert_eq!(paginator.records(), &[30]);
    }

    #[test]
    fn test_reset_returns_to_initial_url() {
        let mut paginator: Paginator<u64> = Paginator::new("/api/x/");
        paginator.set_page_url("/api/x/?page=4");
        paginator.reset();

        assert_eq!(paginator.page_url(), "/api/x/");
    }
}
