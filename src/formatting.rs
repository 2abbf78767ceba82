//! Text rendering of the dashboard views
//!
//! Output is Markdown so MCP clients and terminals both display it sensibly.

use crate::papers::{CategoryCount, CategoryShare, MonthBucket, PaperRecord};
use crate::view_model::{ShareWindow, Summary, ViewModel};

/// Header of the "all categories" entry in the category list
pub const ALL_CATEGORIES: &str = "All categories";

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Pipes would break the Markdown table
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render papers as a Markdown table
///
/// Columns: title, category, times read, printed, confidence, first read.
pub fn format_table<'a>(papers: impl IntoIterator<Item = &'a PaperRecord>) -> String {
    let rows: Vec<&PaperRecord> = papers.into_iter().collect();
    if rows.is_empty() {
        return "No papers found".to_string();
    }

    let mut result = format!("Found {} paper(s):\n\n", rows.len());
    result.push_str("| Title | Category | Times read | Printed | Confidence | First read |\n");
    result.push_str("|---|---|---|---|---|---|\n");
    for paper in rows {
        result.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            cell(&paper.title),
            cell(&paper.category),
            paper.times_read,
            yes_no(paper.printed),
            cell(&paper.confidence.to_string()),
            cell(&paper.first_read),
        ));
    }
    result
}

/// Render the category selector entries
pub fn format_categories(categories: &[String]) -> String {
    let mut result = format!("- {} (\"\")\n", ALL_CATEGORIES);
    for category in categories {
        result.push_str(&format!("- {}\n", category));
    }
    result
}

/// Render one pie chart series
pub fn format_shares(title: &str, shares: &[CategoryShare]) -> String {
    if shares.is_empty() {
        return format!("{}: no papers\n", title);
    }

    let mut result = format!("{}:\n", title);
    for share in shares {
        result.push_str(&format!(
            "- {}: {} ({})\n",
            share.label,
            share.count,
            share.percentage_label()
        ));
    }
    result
}

/// Render month buckets as a bar histogram
pub fn format_histogram(buckets: &[MonthBucket]) -> String {
    if buckets.is_empty() {
        return "No printed papers read yet\n".to_string();
    }

    let width = buckets.iter().map(|b| b.label().len()).max().unwrap_or(0);
    let mut result = String::from("Printed papers read per month:\n");
    for bucket in buckets {
        result.push_str(&format!(
            "{:<width$} | {} {}\n",
            bucket.label(),
            "#".repeat(bucket.count),
            bucket.count,
            width = width
        ));
    }
    result
}

/// Render the histogram's per-category counts, sorted by category
pub fn format_histogram_categories(counts: &CategoryCount) -> String {
    if counts.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<(&String, &usize)> = counts.iter().collect();
    sorted.sort();
    let parts: Vec<String> = sorted
        .iter()
        .map(|(category, count)| format!("{}: {}", category, count))
        .collect();
    format!("By category: {}\n", parts.join(", "))
}

pub fn format_summary(summary: &Summary) -> String {
    let mut result = format!(
        "Papers: {} | Printed: {} | Printed and read: {} | Total reads: {}\n",
        summary.total, summary.printed, summary.printed_and_read, summary.total_reads
    );
    if summary.undated > 0 {
        result.push_str(&format!(
            "Undated: {} (excluded from monthly and recent views)\n",
            summary.undated
        ));
    }
    result
}

/// Chart title for a share window
pub fn share_title(window: ShareWindow, recency_months: u32) -> String {
    match window {
        ShareWindow::Overall => "Categories overall".to_string(),
        ShareWindow::Recent => format!("Categories in the last {} months", recency_months),
    }
}

/// Render every view of the dashboard
pub fn format_dashboard(model: &ViewModel) -> String {
    let months = model.settings().recency_months;
    let mut result = format_summary(&model.summary());

    result.push('\n');
    if !model.query().is_empty() || !model.category().is_empty() {
        result.push_str(&format!(
            "Search: \"{}\" | Category: {}\n\n",
            model.query(),
            if model.category().is_empty() {
                ALL_CATEGORIES
            } else {
                model.category()
            }
        ));
    }
    result.push_str(&format_table(model.table_rows()));

    for window in [ShareWindow::Overall, ShareWindow::Recent] {
        result.push('\n');
        result.push_str(&format_shares(
            &share_title(window, months),
            model.shares(window),
        ));
    }

    result.push('\n');
    result.push_str(&format_histogram(model.histogram()));
    result.push_str(&format_histogram_categories(model.histogram_categories()));
    result
}
