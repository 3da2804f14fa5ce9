// src/output/writer.rs
// =============================================================================
// This module persists crawled pages to disk as artifact pairs.
//
// For each page i we write two files into the output directory:
// - page_<i>.md             the formatted Markdown document
// - page_<i>_original.json  the full Page record, pretty-printed JSON
//
// The index is positional: page 0 is the first page the crawl completed,
// page 1 the second, and so on, with no gaps. The JSON sidecar is the
// archival copy - a viewer serves it byte-for-byte as the "raw" download,
// so it keeps every field including the links list.
//
// Write errors are fatal. There is no partial-success bookkeeping: if the
// fifth file fails, the first four stay on disk with no manifest saying
// the run was incomplete.
// =============================================================================

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::extract::Page;
use crate::format::format_content;

// Checks the collision policy for the output directory
//
// Re-running a crawl reuses the same positional file names, so writing into
// a directory that already has files silently shadows the previous run.
// We refuse unless the caller passed --force.
pub fn check_output_dir(dir: &Path, force: bool) -> Result<()> {
    if force || !dir.exists() {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read output directory {}", dir.display()))?;
    if entries.next().is_some() {
        bail!(
            "Output directory {} is not empty; pass --force to overwrite",
            dir.display()
        );
    }
    Ok(())
}

// Writes all pages as artifact pairs
//
// Parameters:
//   pages: crawled pages in completion order (index i = position i)
//   dir: output directory, created if missing
//
// Returns: Ok on success; any I/O or serialization failure is fatal
pub fn save_pages(pages: &[Page], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    for (i, page) in pages.iter().enumerate() {
        let md_path = dir.join(format!("page_{}.md", i));
        let json_path = dir.join(format!("page_{}_original.json", i));

        // Markdown: top-level title heading, then the formatted body
        let markdown = format!("# {}\n\n{}", page.title, format_content(&page.content));
        fs::write(&md_path, markdown)
            .with_context(|| format!("Failed to write {}", md_path.display()))?;

        // Sidecar: the original Page record, round-trippable
        let json = serde_json::to_string_pretty(page)?;
        fs::write(&json_path, json)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_page(n: usize) -> Page {
        Page {
            url: format!("https://example.com/{}", n),
            title: format!("Page {}", n),
            content: "Intro\nSome body text here.".to_string(),
            links: vec![format!("https://example.com/{}/child", n)],
        }
    }

    #[test]
    fn test_writes_one_pair_per_page_with_dense_indices() {
        let dir = tempdir().unwrap();
        let pages = vec![sample_page(0), sample_page(1)];

        save_pages(&pages, dir.path()).unwrap();

        for i in 0..2 {
            assert!(dir.path().join(format!("page_{}.md", i)).exists());
            assert!(dir
                .path()
                .join(format!("page_{}_original.json", i))
                .exists());
        }
        assert!(!dir.path().join("page_2.md").exists());
    }

    #[test]
    fn test_markdown_starts_with_title_heading() {
        let dir = tempdir().unwrap();
        save_pages(&[sample_page(0)], dir.path()).unwrap();

        let md = fs::read_to_string(dir.path().join("page_0.md")).unwrap();
        assert!(md.starts_with("# Page 0\n\n"));
        // "Intro" is heading-shaped, the rest is a paragraph
        assert!(md.contains("# Intro\n\nSome body text here."));
    }

    #[test]
    fn test_sidecar_round_trips_the_page() {
        let dir = tempdir().unwrap();
        let page = sample_page(3);
        save_pages(std::slice::from_ref(&page), dir.path()).unwrap();

        let json = fs::read_to_string(dir.path().join("page_0_original.json")).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back.url, page.url);
        assert_eq!(back.title, page.title);
        assert_eq!(back.content, page.content);
        assert_eq!(back.links, page.links);
    }

    #[test]
    fn test_empty_crawl_still_creates_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out");

        save_pages(&[], &target).unwrap();

        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn test_nonempty_dir_rejected_without_force() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page_0.md"), "old run").unwrap();

        assert!(check_output_dir(dir.path(), false).is_err());
        assert!(check_output_dir(dir.path(), true).is_ok());
    }

    // End-to-end: crawl one page from an in-memory site, persist it, and
    // check both artifacts
    #[tokio::test]
    async fn test_single_page_crawl_produces_artifact_pair() {
        let html = concat!(
            "<html><head><title>Home</title></head>",
            "<body><main>Welcome.\n\nAbout\nWe build things.</main>",
            r#"<a href="/about">About</a></body></html>"#,
        );
        let fetch = |url: String| {
            let html = html.to_string();
            async move {
                if url == "https://site.test/" {
                    Ok(html)
                } else {
                    Err(anyhow::anyhow!("HTTP 404"))
                }
            }
        };

        let pages = crate::crawl::crawl_with("https://site.test/", 1, fetch)
            .await
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].links, vec!["https://site.test/about"]);

        let dir = tempdir().unwrap();
        save_pages(&pages, dir.path()).unwrap();

        let md = fs::read_to_string(dir.path().join("page_0.md")).unwrap();
        assert_eq!(md, "# Home\n\nWelcome.\n\n# About\n\nWe build things.");

        let json = fs::read_to_string(dir.path().join("page_0_original.json")).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back.url, "https://site.test/");
        assert_eq!(back.content, "Welcome.\n\nAbout\nWe build things.");
    }

    #[test]
    fn test_missing_dir_passes_collision_check() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("not_yet");
        assert!(check_output_dir(&target, false).is_ok());
    }
}
