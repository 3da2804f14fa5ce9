// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Check the output directory collision policy (fail fast, before fetching)
// 3. Crawl the site breadth-first from the seed URL
// 4. Persist every crawled page as a Markdown + JSON artifact pair
// 5. Exit with proper code (0 = success, 1 = error)
//
// Rust concepts used:
// - async/await: The crawl makes network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - breadth-first crawling
mod extract; // src/extract/ - page content and link extraction
mod format; // src/format.rs - plain text to Markdown heuristics
mod output; // src/output/ - artifact writing

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Persistence failures and bad arguments land here; a partial
            // output directory is not cleaned up, so signal loudly
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
//
// Fetch failures for individual pages are absorbed inside the crawl; only
// setup and persistence errors propagate out of here
async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Refuse to shadow a previous run's artifacts unless --force was given.
    // Checked before any network traffic so a doomed run costs nothing.
    output::check_output_dir(&cli.output, cli.force)?;

    println!("🔍 Crawling {} (up to {} pages)", cli.url, cli.max_pages);

    let pages = crawl::crawl_site(&cli.url, cli.max_pages).await?;

    output::save_pages(&pages, &cli.output)?;

    println!(
        "💾 Saved {} page(s) to {}",
        pages.len(),
        cli.output.display()
    );

    Ok(())
}
