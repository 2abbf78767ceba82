//! Category and month aggregation
//!
//! Functions here are pure: they take a record subset and return counts.
//! Callers decide which subset (filtered, printed-and-read, recent) to pass.

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::date_key::DateKey;
use super::record::PaperRecord;
use crate::error::{PaperError, PaperResult};

/// Label of the merged bucket for categories under the share threshold
pub const OTHER_LABEL: &str = "Other";

/// Occurrences of each category
pub type CategoryCount = HashMap<String, usize>;

/// Count of records first read in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub key: DateKey,
    pub count: usize,
}

impl MonthBucket {
    /// Canonical label, e.g. `"Jan-2024"`
    pub fn label(&self) -> String {
        self.key.label()
    }
}

/// One pie-chart segment
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    /// 0..=100
    pub percentage: f64,
}

impl CategoryShare {
    /// Percentage with one decimal place, e.g. `"12.5%"`
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Count records per category
pub fn category_counts(records: &[&PaperRecord]) -> CategoryCount {
    let mut counts = CategoryCount::new();
    for record in records {
        *counts.entry(record.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Count records per first-read month, oldest month first
///
/// Records with an unparseable `firstRead` are skipped.
pub fn month_buckets(records: &[&PaperRecord]) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<DateKey, usize> = BTreeMap::new();
    for record in records {
        match record.first_read_key() {
            Ok(key) => *buckets.entry(key).or_insert(0) += 1,
            Err(e) => debug!(title = %record.title, "skipping record in month buckets: {}", e),
        }
    }
    buckets
        .into_iter()
        .map(|(key, count)| MonthBucket { key, count })
        .collect()
}

/// Percentage share of each category, small ones merged into `"Other"`
///
/// A category whose share is below `other_threshold` percent is merged;
/// a share of exactly `other_threshold` is kept. Kept categories are ordered
/// by label and the merged bucket comes last.
///
/// # Errors
/// `PaperError::EmptyInput` when `records` is empty.
pub fn category_shares(
    records: &[&PaperRecord],
    other_threshold: f64,
) -> PaperResult<Vec<CategoryShare>> {
    if records.is_empty() {
        return Err(PaperError::EmptyInput);
    }

    let total = records.len() as f64;
    let percentage_of = |count: usize| count as f64 * 100.0 / total;

    let mut sorted: Vec<(String, usize)> = category_counts(records).into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut shares = Vec::new();
    let mut merged = 0usize;
    for (label, count) in sorted {
        if percentage_of(count) < other_threshold {
            merged += count;
        } else {
            shares.push(CategoryShare {
                label,
                count,
                percentage: percentage_of(count),
            });
        }
    }

    if merged > 0 {
        // A real category named "Other" absorbs the merged ones
        match shares.iter().position(|s| s.label == OTHER_LABEL) {
            Some(idx) => {
                let mut existing = shares.remove(idx);
                existing.count += merged;
                existing.percentage = percentage_of(existing.count);
                shares.push(existing);
            }
            None => shares.push(CategoryShare {
                label: OTHER_LABEL.to_string(),
                count: merged,
                percentage: percentage_of(merged),
            }),
        }
    }

    Ok(shares)
}
