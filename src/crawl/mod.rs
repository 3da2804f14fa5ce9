// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Respects same-origin restriction (doesn't crawl external sites)
// - Page budget so a crawl always terminates
// - One failed page never stops the rest of the crawl
//
// Rust concepts:
// - Async programming: For network requests
// - Collections: HashSet for tracking visited URLs, VecDeque for the queue
// =============================================================================

mod frontier;

// Re-export the crawl entry points
// crawl_site fetches over HTTP; crawl_with takes any fetch function and
// exists so the traversal can be tested without a network
pub use frontier::{crawl_site, crawl_with, Frontier};
