// src/output/mod.rs
// =============================================================================
// This module persists crawl results to disk.
//
// Submodules:
// - writer: Writes the page_<i>.md / page_<i>_original.json artifact pairs
//   and enforces the output-directory collision policy
// =============================================================================

mod writer;

pub use writer::{check_output_dir, save_pages};
