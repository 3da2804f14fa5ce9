// src/format.rs
// =============================================================================
// This module turns the plain text extracted from a page into Markdown with
// headings and paragraphs, using line-shape heuristics.
//
// The rules (single pass, no lookahead):
// - Blank line: ends the current paragraph
// - Short line (<= 100 chars) not ending in a period: treated as a heading
//   - a line under 50 chars resets the heading level to 1
//   - a longer heading nests one level deeper, capped at level 3
// - Anything else: accumulates into the current paragraph
//
// These thresholds (100, 50, cap 3) are part of the output contract - the
// archived Markdown must come out the same across runs and versions, so
// don't tune them. The heuristic is knowingly lossy: a short line that
// happens not to end in a period (a quote fragment, say) becomes a heading.
// =============================================================================

// Formats raw extracted text as Markdown
//
// Parameters:
//   raw: plain text, one extracted block per line
//
// Returns: Markdown string with blocks separated by blank lines
pub fn format_content(raw: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut level = 0usize;
    let mut paragraph: Vec<&str> = Vec::new();

    for line in raw.split('\n') {
        let line = line.trim();

        if line.is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            continue;
        }

        // Lengths are in characters, not bytes, so non-ASCII text is
        // classified the same way as ASCII
        let chars = line.chars().count();

        if chars <= 100 && !line.ends_with('.') {
            // Heading-shaped line
            flush_paragraph(&mut blocks, &mut paragraph);
            level = if level == 0 || chars < 50 {
                1
            } else {
                (level + 1).min(3)
            };
            blocks.push(format!("{} {}", "#".repeat(level), line));
        } else {
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    blocks.join("\n\n")
}

// Emits the accumulated paragraph lines as one block, joined with spaces
fn flush_paragraph(blocks: &mut Vec<String>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(paragraph.join(" "));
        paragraph.clear();
    }
}
