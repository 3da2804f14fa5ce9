// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitescribe",
    version = "0.1.0",
    about = "Crawl a website and archive its pages as Markdown",
    long_about = "sitescribe crawls a website breadth-first starting from a seed URL, extracts \
                  the readable content of every same-origin page it finds, and writes one \
                  Markdown document plus one JSON sidecar per page into an output directory."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed)
    pub url: String,

    /// Maximum number of pages to crawl
    ///
    /// The crawl stops as soon as this many pages have been collected,
    /// even if the queue still holds undiscovered links
    #[arg(long, default_value_t = 100)]
    pub max_pages: usize,

    /// Directory the page_<i>.md / page_<i>_original.json pairs are written to
    #[arg(long, default_value = "scraped_data")]
    pub output: PathBuf,

    /// Write into the output directory even if it already contains files
    ///
    /// Artifact names are positional (page_0, page_1, ...), so re-running a
    /// crawl overwrites earlier artifacts. Without this flag we refuse to
    /// touch a non-empty directory.
    #[arg(long)]
    pub force: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 2. What is PathBuf?
//    - The owned counterpart of &Path, like String vs &str
//    - clap parses the --output value straight into one
//
// 3. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
// -----------------------------------------------------------------------------
