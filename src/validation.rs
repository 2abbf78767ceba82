//! Validation helper functions for the paper dashboard MCP tools
//!
//! This module checks tool parameters (category selection, share window,
//! recency months) before they reach the view model.

use crate::view_model::ShareWindow;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Search query as typed; `None` searches everything
///
/// Whitespace is significant: `"deep "` does not match "DeepMind".
pub fn normalize_query(query: Option<String>) -> String {
    query.unwrap_or_default()
}

/// Resolve a category selection against the known categories
///
/// `None` and `""` select all categories.
///
/// # Returns
/// The selected category, or an error listing the available ones
pub fn parse_category(category: Option<String>, known: &[String]) -> McpResult<String> {
    let category = category.unwrap_or_default();
    if category.is_empty() || known.contains(&category) {
        return Ok(category);
    }
    Err(invalid_params(format_invalid_category_error(
        &category, known,
    )))
}

/// Format an error message for an unknown category with the available list
pub fn format_invalid_category_error(category: &str, known: &[String]) -> String {
    if known.is_empty() {
        format!(
            "Category '{}' does not exist. No papers have been loaded.",
            category
        )
    } else {
        format!(
            "Category '{}' does not exist.\nAvailable categories: {}",
            category,
            known.join(", ")
        )
    }
}

/// Parse the pie chart window: "overall" (default) or "recent"
pub fn parse_share_window(window: Option<&str>) -> McpResult<ShareWindow> {
    match window.map(str::trim) {
        None | Some("") | Some("overall") => Ok(ShareWindow::Overall),
        Some("recent") => Ok(ShareWindow::Recent),
        Some(other) => Err(invalid_params(format!(
            "Invalid window '{}'. Valid windows: overall, recent",
            other
        ))),
    }
}

/// Validate a recency window in months, falling back to `default`
pub fn parse_months(months: Option<u32>, default: u32) -> McpResult<u32> {
    match months {
        None => Ok(default),
        Some(0) => Err(invalid_params(
            "Months must be at least 1".to_string(),
        )),
        Some(m) => Ok(m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec!["NLP".to_string(), "Vision".to_string()]
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(None, &known()).unwrap(), "");
        assert_eq!(parse_category(Some(String::new()), &known()).unwrap(), "");
        assert_eq!(
            parse_category(Some("Vision".to_string()), &known()).unwrap(),
            "Vision"
        );
        assert!(parse_category(Some("vision".to_string()), &known()).is_err());
    }

    #[test]
    fn test_invalid_category_message_lists_available() {
        let message = format_invalid_category_error("Bio", &known());
        assert!(message.contains("Category 'Bio' does not exist"));
        assert!(message.contains("Available categories: NLP, Vision"));

        let message = format_invalid_category_error("Bio", &[]);
        assert!(message.contains("No papers have been loaded"));
    }

    #[test]
    fn test_parse_share_window() {
        assert_eq!(parse_share_window(None).unwrap(), ShareWindow::Overall);
        assert_eq!(parse_share_window(Some("")).unwrap(), ShareWindow::Overall);
        assert_eq!(
            parse_share_window(Some("recent")).unwrap(),
            ShareWindow::Recent
        );
        assert!(parse_share_window(Some("weekly")).is_err());
    }

    #[test]
    fn test_parse_months() {
        assert_eq!(parse_months(None, 12).unwrap(), 12);
        assert_eq!(parse_months(Some(3), 12).unwrap(), 3);
        assert!(parse_months(Some(0), 12).is_err());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(None), "");
        assert_eq!(normalize_query(Some("graph ".to_string())), "graph ");
        assert_eq!(normalize_query(Some(" ".to_string())), " ");
    }
}
