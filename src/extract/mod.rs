// src/extract/mod.rs
// =============================================================================
// This module contains all content extraction logic.
//
// Submodules:
// - page: Turns fetched HTML into a Page record (title, content, links)
// - links: Resolves hrefs and filters out cross-origin destinations
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod links;
mod page;

// Re-export public items from submodules
// This lets users write `extract::extract()` instead of
// `extract::page::extract()`
pub use links::normalize;
pub use page::{extract, Page};
