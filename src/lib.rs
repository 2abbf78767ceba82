//! Paper Dashboard Library
//!
//! This library loads a JSON reading list of papers and serves a searchable
//! table plus summary charts over it: category shares (overall and for the
//! recent months) and a histogram of printed papers read per month. The views
//! are exposed as Model Context Protocol (MCP) tools and as plain text.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `PaperServerHandler` - Handles MCP protocol communication
//! - **View Layer**: `view_model` module - Filter state and derived views
//! - **Domain Layer**: `papers` module - Records, date keys, filters, aggregates
//!
//! Loading the input file through `storage` is the only asynchronous step.
//!
//! # Example
//!
//! ```no_run
//! use paper_dashboard::{DashboardSettings, PaperServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = PaperServerHandler::load("papers.json", DashboardSettings::default()).await?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
pub mod logging;
pub mod papers;
pub mod settings;
pub mod storage;
pub mod validation;
pub mod view_model;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::Result as McpResult;
use std::path::Path;
use std::sync::Mutex;

// Re-export commonly used types
pub use error::PaperError;
pub use papers::{CategoryShare, Confidence, DateKey, MonthBucket, PaperRecord};
pub use settings::DashboardSettings;
pub use storage::Storage;
pub use view_model::{ShareWindow, Summary, ViewModel};

/// MCP Server handler for the paper dashboard
///
/// Owns a single `ViewModel`; every tool call that touches the search box or
/// the category selector updates its state and recomputes the views.
pub struct PaperServerHandler {
    pub(crate) view: Mutex<ViewModel>,
}

impl PaperServerHandler {
    /// Load papers from a JSON file and build the handler
    ///
    /// # Arguments
    /// * `data_path` - Path to the papers file (JSON array)
    /// * `settings` - Dashboard tunables
    ///
    /// # Returns
    /// Result containing the handler, or the load error. No partially
    /// populated handler is ever returned.
    pub async fn load(data_path: impl AsRef<Path>, settings: DashboardSettings) -> Result<Self> {
        let records = Storage::new(data_path).load().await?;
        Ok(Self::new(ViewModel::new(records, settings)?))
    }

    /// Wrap an already built view model
    pub fn new(view: ViewModel) -> Self {
        Self {
            view: Mutex::new(view),
        }
    }

    /// Render the whole dashboard for the current filter state
    pub fn render_dashboard(&self) -> String {
        let view = self.view.lock().unwrap();
        formatting::format_dashboard(&view)
    }

    /// Set the search and category controls outside of a tool call
    pub fn apply_filter(&self, query: Option<String>, category: Option<String>) -> McpResult<()> {
        let mut view = self.view.lock().unwrap();
        Self::select(&mut view, query, category)
    }

    /// Apply search and category controls, validating the category
    fn select(view: &mut ViewModel, query: Option<String>, category: Option<String>) -> McpResult<()> {
        let category = validation::parse_category(category, view.categories())?;
        view.set_filter(validation::normalize_query(query), category);
        Ok(())
    }
}

/// Reading-list dashboard over a JSON file of papers.
///
/// Each paper has a title, category, read count, printed flag, confidence and
/// the month it was first read ("Month::Year").
///
/// Key views:
/// - **list_papers**: the table, filtered by title search and category, newest first
/// - **categories**: values accepted by the category filter
/// - **category_shares**: pie chart data, overall or for the recent months
/// - **histogram**: printed papers read per month, following the current filter
/// - **summary**: totals over the whole list
/// - **recent_papers**: papers first read in the last N months
#[mcp_server]
impl McpServer for PaperServerHandler {
    /// **Table**: List papers matching a title search and category, latest first read first.
    /// **Use**: No arguments=all papers. The selection also drives the histogram tool.
    #[tool]
    async fn list_papers(
        &self,
        /// Case-insensitive title search (optional, empty=all)
        query: Option<String>,
        /// Exact category name (optional, empty=all categories)
        category: Option<String>,
    ) -> McpResult<String> {
        let mut view = self.view.lock().unwrap();
        Self::select(&mut view, query, category)?;
        Ok(formatting::format_table(view.table_rows()))
    }

    /// **Categories**: List the distinct categories, sorted, for use as the category filter.
    #[tool]
    async fn categories(&self) -> McpResult<String> {
        let view = self.view.lock().unwrap();
        Ok(formatting::format_categories(view.categories()))
    }

    /// **Pie chart**: Category shares with one-decimal percentages. Small categories are merged into "Other".
    /// **Use**: Not affected by search or category filter.
    #[tool]
    async fn category_shares(
        &self,
        /// Window: "overall" (default) or "recent" (last N months, N from settings)
        window: Option<String>,
    ) -> McpResult<String> {
        let window = validation::parse_share_window(window.as_deref())?;
        let view = self.view.lock().unwrap();
        let title = formatting::share_title(window, view.settings().recency_months);
        Ok(formatting::format_shares(&title, view.shares(window)))
    }

    /// **Histogram**: Printed papers read at least once, counted per first-read month, oldest first.
    /// **Use**: Follows the same title search and category as list_papers.
    #[tool]
    async fn histogram(
        &self,
        /// Case-insensitive title search (optional, empty=all)
        query: Option<String>,
        /// Exact category name (optional, empty=all categories)
        category: Option<String>,
    ) -> McpResult<String> {
        let mut view = self.view.lock().unwrap();
        Self::select(&mut view, query, category)?;
        Ok(formatting::format_histogram(view.histogram()))
    }

    /// **Summary**: Totals over the whole list (papers, printed, printed and read, reads, undated).
    #[tool]
    async fn summary(&self) -> McpResult<String> {
        let view = self.view.lock().unwrap();
        Ok(formatting::format_summary(&view.summary()))
    }

    /// **Recent**: Papers first read within the last N months, latest first.
    #[tool]
    async fn recent_papers(
        &self,
        /// Number of months (optional, default from settings, must be >= 1)
        months: Option<u32>,
    ) -> McpResult<String> {
        let view = self.view.lock().unwrap();
        let months = validation::parse_months(months, view.settings().recency_months)?;
        Ok(formatting::format_table(view.recent(months)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn paper(title: &str, category: &str, times_read: u32, printed: bool, first_read: &str) -> PaperRecord {
        PaperRecord {
            title: title.to_string(),
            category: category.to_string(),
            times_read,
            printed,
            confidence: Confidence::Text("medium".to_string()),
            first_read: first_read.to_string(),
        }
    }

    fn get_test_handler() -> PaperServerHandler {
        let records = vec![
            paper("Attention Is All You Need", "NLP", 3, true, "June::2026"),
            paper("BERT", "NLP", 1, false, "July::2026"),
            paper("ResNet", "Vision", 2, true, "March::2024"),
            paper("Mask R-CNN", "Vision", 1, true, "March::2024"),
            paper("AlphaFold", "Bio", 1, true, "August::2025"),
        ];
        let view = ViewModel::with_today(
            records,
            DashboardSettings::default(),
            DateKey::new(2026, 10).unwrap(),
        )
        .unwrap();
        PaperServerHandler::new(view)
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Raft","category":"Systems","timesRead":2,"printed":true,"confidence":"high","firstRead":"April::2024"}}]"#
        )
        .unwrap();

        let handler = PaperServerHandler::load(file.path(), DashboardSettings::default())
            .await
            .unwrap();
        let table = handler.list_papers(None, None).await.unwrap();
        assert!(table.contains("| Raft | Systems | 2 | Yes | high | April::2024 |"));
    }

    #[tokio::test]
    async fn test_load_failure_yields_no_handler() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = PaperServerHandler::load(file.path(), DashboardSettings::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_papers_filters_and_sorts() {
        let handler = get_test_handler();

        let all = handler.list_papers(None, None).await.unwrap();
        assert!(all.starts_with("Found 5 paper(s):"));
        let bert = all.find("BERT").unwrap();
        let attention = all.find("Attention").unwrap();
        let resnet = all.find("ResNet").unwrap();
        assert!(bert < attention && attention < resnet);

        let nlp = handler
            .list_papers(Some("bert".to_string()), Some("NLP".to_string()))
            .await
            .unwrap();
        assert!(nlp.starts_with("Found 1 paper(s):"));
        assert!(nlp.contains("| BERT | NLP | 1 | No |"));

        let none = handler
            .list_papers(Some("gan".to_string()), None)
            .await
            .unwrap();
        assert_eq!(none, "No papers found");
    }

    #[tokio::test]
    async fn test_list_papers_query_whitespace_is_significant() {
        let handler = get_test_handler();

        // "Mask R-CNN" contains "r-cnn" but not " r-cnn " with a trailing space
        let padded = handler
            .list_papers(Some(" r-cnn ".to_string()), None)
            .await
            .unwrap();
        assert_eq!(padded, "No papers found");

        let leading = handler
            .list_papers(Some("mask r".to_string()), None)
            .await
            .unwrap();
        assert!(leading.starts_with("Found 1 paper(s):"));

        // "All You" only matches with its inner space intact
        let inner = handler
            .list_papers(Some("all you ".to_string()), None)
            .await
            .unwrap();
        assert!(inner.contains("Attention Is All You Need"));
        let trailing = handler
            .list_papers(Some("need ".to_string()), None)
            .await
            .unwrap();
        assert_eq!(trailing, "No papers found");
    }

    #[tokio::test]
    async fn test_list_papers_rejects_unknown_category() {
        let handler = get_test_handler();
        let result = handler
            .list_papers(None, Some("Robotics".to_string()))
            .await;
        assert!(result.is_err());

        // State is left untouched on a rejected selection
        let view = handler.view.lock().unwrap();
        assert_eq!(view.category(), "");
    }

    #[tokio::test]
    async fn test_categories_sorted() {
        let handler = get_test_handler();
        let categories = handler.categories().await.unwrap();
        assert_eq!(
            categories,
            "- All categories (\"\")\n- Bio\n- NLP\n- Vision\n"
        );
    }

    #[tokio::test]
    async fn test_histogram_follows_selection() {
        let handler = get_test_handler();

        let all = handler.histogram(None, None).await.unwrap();
        assert!(all.contains("Mar-2024 | ## 2"));
        assert!(all.contains("Aug-2025 | # 1"));
        assert!(all.contains("Jun-2026 | # 1"));
        assert!(!all.contains("Jul-2026"));

        let nlp = handler
            .histogram(None, Some("NLP".to_string()))
            .await
            .unwrap();
        assert!(nlp.contains("Jun-2026 | # 1"));
        assert!(!nlp.contains("Mar-2024"));

        let none = handler
            .histogram(Some("bert".to_string()), None)
            .await
            .unwrap();
        assert_eq!(none, "No printed papers read yet\n");
    }

    #[tokio::test]
    async fn test_category_shares_windows() {
        let handler = get_test_handler();

        let overall = handler.category_shares(None).await.unwrap();
        assert!(overall.starts_with("Categories overall:"));
        assert!(overall.contains("- Bio: 1 (20.0%)"));
        assert!(overall.contains("- NLP: 2 (40.0%)"));
        assert!(overall.contains("- Vision: 2 (40.0%)"));

        // Search state does not affect the pie charts
        handler
            .list_papers(Some("resnet".to_string()), None)
            .await
            .unwrap();
        let again = handler
            .category_shares(Some("overall".to_string()))
            .await
            .unwrap();
        assert_eq!(overall, again);

        let recent = handler
            .category_shares(Some("recent".to_string()))
            .await
            .unwrap();
        assert!(recent.starts_with("Categories in the last 12 months:"));
        assert!(recent.contains("- NLP: 2 (100.0%)"));
        assert!(!recent.contains("Vision"));

        assert!(
            handler
                .category_shares(Some("weekly".to_string()))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_summary() {
        let handler = get_test_handler();
        let summary = handler.summary().await.unwrap();
        assert_eq!(
            summary,
            "Papers: 5 | Printed: 4 | Printed and read: 4 | Total reads: 8\n"
        );
    }

    #[tokio::test]
    async fn test_recent_papers() {
        let handler = get_test_handler();

        let recent = handler.recent_papers(None).await.unwrap();
        assert!(recent.starts_with("Found 2 paper(s):"));

        let wider = handler.recent_papers(Some(15)).await.unwrap();
        assert!(wider.contains("AlphaFold"));
        assert!(!wider.contains("ResNet"));

        assert!(handler.recent_papers(Some(0)).await.is_err());
        assert_eq!(
            handler.recent_papers(Some(1)).await.unwrap(),
            "No papers found"
        );
    }

    #[test]
    fn test_render_dashboard() {
        let handler = get_test_handler();
        let text = handler.render_dashboard();
        assert!(text.contains("Papers: 5"));
        assert!(!text.contains("Search:"));

        handler
            .apply_filter(None, Some("Vision".to_string()))
            .unwrap();
        let text = handler.render_dashboard();
        assert!(text.contains("Search: \"\" | Category: Vision"));
        assert!(text.contains("Found 2 paper(s):"));
        assert!(handler.apply_filter(None, Some("Math".to_string())).is_err());
        assert!(text.contains("Categories overall:"));
        assert!(text.contains("Printed papers read per month:"));
    }
}
