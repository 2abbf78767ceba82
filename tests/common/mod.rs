//! Common test utilities for integration tests

#![allow(dead_code)]

use paper_dashboard::{Confidence, PaperRecord};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a paper with the fields that matter for filtering
pub fn create_test_paper(
    title: &str,
    category: &str,
    times_read: u32,
    printed: bool,
    first_read: &str,
) -> PaperRecord {
    PaperRecord {
        title: title.to_string(),
        category: category.to_string(),
        times_read,
        printed,
        confidence: Confidence::Text("medium".to_string()),
        first_read: first_read.to_string(),
    }
}

/// Write `papers` as a JSON array to a temporary file
pub fn write_papers_file(papers: &[PaperRecord]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(papers).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// Borrow every record, the shape filter and aggregate functions take
pub fn refs(papers: &[PaperRecord]) -> Vec<&PaperRecord> {
    papers.iter().collect()
}
