// src/export.rs
// =============================================================================
// Presentation-side helpers: turning a crawl report's links into {url, type}
// rows, filtering them, and writing them out as CSV.
//
// Nothing here feeds back into the crawl. Filtering changes what the user
// sees and saves, never what was crawled or what the tally says.
//
// Rust concepts:
// - serde rename: "type" is a Rust keyword, so the struct field is called
//   `kind` but serializes as "type" in JSON and in the CSV header
// - The csv crate: Writer::serialize writes one record per struct and
//   derives the header row from the field names
// =============================================================================

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::classify;

/// The type label for links with no extension: a navigable page.
pub const PAGE_KIND: &str = "HTML";

/// One row of output: a discovered URL and its classified type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRow {
    pub url: String,
    /// ".pdf", ".jpg", ... or "HTML" for extension-less pages
    #[serde(rename = "type")]
    pub kind: String,
}

/// Builds one row per discovered link, in the order given.
pub fn build_rows(links: &[String]) -> Vec<LinkRow> {
    links
        .iter()
        .map(|url| LinkRow {
            url: url.clone(),
            kind: classify::extract_extension(url).unwrap_or_else(|| PAGE_KIND.to_string()),
        })
        .collect()
}

/// Normalizes a user-supplied type filter: "pdf", ".pdf" and "PDF" all
/// become ".pdf", the form the tally and the rows use.
pub fn normalize_type_filter(raw: &str) -> String {
    format!(".{}", raw.trim().trim_start_matches('.').to_lowercase())
}

/// Keeps only the rows the user asked to see.
///
/// `only` restricts the extension-bearing rows (an empty list keeps all of
/// them); the extension-less page rows are governed solely by `skip_html`.
/// The two knobs are independent.
pub fn filter_rows(rows: Vec<LinkRow>, only: &[String], skip_html: bool) -> Vec<LinkRow> {
    rows.into_iter()
        .filter(|row| {
            if row.kind == PAGE_KIND {
                !skip_html
            } else {
                only.is_empty() || only.iter().any(|wanted| *wanted == row.kind)
            }
        })
        .collect()
}

/// Writes the rows to `path` as CSV with a "url,type" header.
pub fn write_csv(path: &Path, rows: &[LinkRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }

    // Writer buffers internally; flush before the file handle drops
    writer.flush()?;
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the filter treat HTML rows separately?
//    - "HTML" isn't an extension someone asked for; it's the absence of one
//    - --only pdf means "of the files, show me the PDFs" - the page rows
//      keep following --skip-html, so the two flags compose predictably
//
// 2. What does csv::Writer::serialize do?
//    - Uses the struct's serde implementation to write one CSV record
//    - On the first call it also writes a header row from the field names,
//      which is where the #[serde(rename = "type")] shows up
//
// 3. Why flush() when drop would write anyway?
//    - Errors during a drop-triggered flush have nowhere to go
//    - Calling flush() explicitly turns a silent truncated file into a
//      visible error the caller can report
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<LinkRow> {
        vec![
            LinkRow {
                url: "https://example.com/about".to_string(),
                kind: "HTML".to_string(),
            },
            LinkRow {
                url: "https://example.com/report.pdf".to_string(),
                kind: ".pdf".to_string(),
            },
            LinkRow {
                url: "https://example.com/logo.png".to_string(),
                kind: ".png".to_string(),
            },
        ]
    }

    #[test]
    fn test_build_rows_classifies_each_link() {
        let links = vec![
            "https://example.com/about".to_string(),
            "https://example.com/report.pdf".to_string(),
        ];
        let rows = build_rows(&links);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, "HTML");
        assert_eq!(rows[1].kind, ".pdf");
        assert_eq!(rows[1].url, "https://example.com/report.pdf");
    }

    #[test]
    fn test_normalize_type_filter_accepts_common_spellings() {
        assert_eq!(normalize_type_filter("pdf"), ".pdf");
        assert_eq!(normalize_type_filter(".pdf"), ".pdf");
        assert_eq!(normalize_type_filter("PDF"), ".pdf");
        assert_eq!(normalize_type_filter(" .PdF "), ".pdf");
    }

    #[test]
    fn test_filter_with_no_restrictions_keeps_everything() {
        let rows = sample_rows();
        let filtered = filter_rows(rows.clone(), &[], false);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_filter_only_restricts_extension_rows() {
        let filtered = filter_rows(sample_rows(), &[".pdf".to_string()], false);

        // The .png row goes; the HTML page row is not an extension row
        // and stays until --skip-html says otherwise
        let kinds: Vec<&str> = filtered.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["HTML", ".pdf"]);
    }

    #[test]
    fn test_filter_skip_html_drops_page_rows() {
        let filtered = filter_rows(sample_rows(), &[".pdf".to_string()], true);
        let kinds: Vec<&str> = filtered.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec![".pdf"]);

        let filtered = filter_rows(sample_rows(), &[], true);
        assert!(filtered.iter().all(|r| r.kind != PAGE_KIND));
    }

    #[test]
    fn test_write_csv_produces_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv");

        write_csv(&path, &sample_rows()[..2]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "url,type",
                "https://example.com/about,HTML",
                "https://example.com/report.pdf,.pdf",
            ]
        );
    }

    #[test]
    fn test_write_csv_with_no_rows_still_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        assert!(path.exists());
    }
}
