//! Paper domain models, filtering and aggregation
//!
//! Split into submodules:
//! - `record`: the `PaperRecord` input model
//! - `date_key`: `"Month::Year"` parsing and ordering
//! - `filter`: search/category predicates, recency window, chronological sort
//! - `aggregate`: category counts, month buckets, category shares

pub mod aggregate;
pub mod date_key;
pub mod filter;
mod record;

// Re-export all public types
pub use aggregate::{CategoryCount, CategoryShare, MonthBucket, OTHER_LABEL};
pub use date_key::DateKey;
pub use record::{Confidence, PaperRecord};

use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}
