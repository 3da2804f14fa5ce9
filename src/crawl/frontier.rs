// src/crawl/frontier.rs
// =============================================================================
// This module implements the breadth-first crawl.
//
// How it works:
// 1. Start with the seed URL in a queue
// 2. Pop the front of the queue, mark it visited, fetch the page
// 3. Extract title/content/links from the HTML
// 4. Add unseen same-origin links to the back of the queue
// 5. Repeat until the queue is empty or the page budget is reached
//
// The queue/visited bookkeeping lives in an explicit Frontier value so the
// traversal rules can be tested on their own, and the loop itself is generic
// over the fetch function so the whole crawl can be tested against an
// in-memory site with no network.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - Generics: crawl_with accepts any async fetch function
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::time::Duration;
use url::Url;

use crate::extract::{extract, Page};

// The crawl bookkeeping: which URLs we have already processed and which are
// waiting their turn
//
// Invariants:
// - visited only grows; a URL enters it exactly once, when it is dequeued
// - pending never holds a URL that is already visited or already pending
#[derive(Debug)]
pub struct Frontier {
    visited: HashSet<String>,
    pending: VecDeque<String>,
}

impl Frontier {
    // Creates a frontier with the seed URL queued
    pub fn new(seed_url: &str) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(seed_url.to_string());
        Frontier {
            visited: HashSet::new(),
            pending,
        }
    }

    // Pops the next URL to process and marks it visited
    //
    // Returns None when the queue is exhausted. A URL that somehow got
    // queued twice is skipped on its second appearance (admit() prevents
    // duplicates, this is a guard).
    pub fn next_url(&mut self) -> Option<String> {
        while let Some(url) = self.pending.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
        }
        None
    }

    // Queues newly discovered links, skipping anything already seen
    //
    // Links are appended in the order given, which is what makes the
    // traversal breadth-first: everything discovered on page N sits behind
    // everything discovered on pages 0..N
    pub fn admit(&mut self, links: &[String]) {
        for link in links {
            if !self.visited.contains(link) && !self.pending.contains(link) {
                self.pending.push_back(link.clone());
            }
        }
    }
}

// Crawls a site breadth-first using the given fetch function
//
// Parameters:
//   seed_url: where the crawl starts
//   max_pages: page budget; the crawl stops once this many pages collected
//   fetch: async function taking a URL and returning the page HTML
//
// Returns: Vec of Page records in completion order (breadth-first).
// A fetch failure is logged and skipped; it never aborts the crawl.
pub async fn crawl_with<F, Fut>(seed_url: &str, max_pages: usize, fetch: F) -> Result<Vec<Page>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    // Reject a seed we can't even parse; everything after this point is
    // recoverable per-page
    Url::parse(seed_url).map_err(|e| anyhow!("Invalid URL '{}': {}", seed_url, e))?;

    let mut frontier = Frontier::new(seed_url);
    let mut pages: Vec<Page> = Vec::new();

    while pages.len() < max_pages {
        let Some(url) = frontier.next_url() else {
            break; // queue exhausted
        };

        println!("  Crawling: {}", url);

        // Queued URLs came out of the normalizer so this parse should not
        // fail, but a bad one only costs us that page
        let source_url = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("  Warning: skipping unparseable URL {}: {}", url, e);
                continue;
            }
        };

        match fetch(url.clone()).await {
            Ok(html) => {
                let page = extract(&html, &source_url);
                frontier.admit(&page.links);
                pages.push(page);
            }
            Err(e) => {
                eprintln!("  Warning: failed to fetch {}: {}", url, e);
            }
        }
    }

    Ok(pages)
}

// Crawls a live website over HTTP
//
// This is the production entry point: it builds a reqwest client with a
// 10 second per-request timeout and runs crawl_with over it. Fetches are
// sequential - one request completes before the next begins.
pub async fn crawl_site(seed_url: &str, max_pages: usize) -> Result<Vec<Page>> {
    // Create HTTP client once and reuse it for all requests
    // (connection pooling)
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    crawl_with(seed_url, max_pages, |url| {
        let client = client.clone();
        async move { fetch_page(&client, &url).await }
    })
    .await
}

// Fetches a web page and returns its HTML content
//
// A non-success status (404, 500, ...) counts as a failed fetch
async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    let html = response.text().await?;
    Ok(html)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why VecDeque and not Vec?
//    - pop from the FRONT is O(1) on a VecDeque, O(n) on a Vec
//    - push_back + pop_front is exactly a FIFO queue, which is what makes
//      the traversal breadth-first
//
// 2. Why is the visited check at dequeue time?
//    - admit() already refuses duplicates, so next_url() should never see
//      one; the insert() return value is a cheap second line of defense
//
// 3. What does 'generic over the fetch function' buy us?
//    - Tests hand crawl_with a closure that looks pages up in a HashMap
//    - The BFS logic is exercised end-to-end with zero network I/O
// -----------------------------------------------------------------------------
