//! Record filtering and ordering
//!
//! All functions borrow the records and return subsets of references, so the
//! caller keeps ownership of the full list.

use std::cmp::Reverse;

use super::date_key::DateKey;
use super::record::PaperRecord;

/// Title contains `query` (case-insensitive) and the category matches
///
/// An empty `category` matches every record.
pub fn matches(record: &PaperRecord, query: &str, category: &str) -> bool {
    let title_matches = record
        .title
        .to_lowercase()
        .contains(&query.to_lowercase());
    let category_matches = category.is_empty() || record.category == category;
    title_matches && category_matches
}

/// Printed and read at least once
pub fn matches_printed_read(record: &PaperRecord) -> bool {
    record.is_printed_and_read()
}

/// Filter by title and category, optionally restricted to printed-and-read
///
/// Input order is preserved.
pub fn apply<'a>(
    records: &[&'a PaperRecord],
    query: &str,
    category: &str,
    require_printed_read: bool,
) -> Vec<&'a PaperRecord> {
    records
        .iter()
        .copied()
        .filter(|r| matches(r, query, category))
        .filter(|r| !require_printed_read || matches_printed_read(r))
        .collect()
}

/// Records first read within the last `months` calendar months of `now`
///
/// A record `months` months old is excluded. Records whose `firstRead`
/// does not parse are excluded.
pub fn by_recency<'a>(
    records: &[&'a PaperRecord],
    months: u32,
    now: DateKey,
) -> Vec<&'a PaperRecord> {
    records
        .iter()
        .copied()
        .filter(|r| match r.first_read_key() {
            Ok(key) => key.months_until(now) < i64::from(months),
            Err(_) => false,
        })
        .collect()
}

/// Stable sort, latest `firstRead` first
///
/// Records with an unparseable `firstRead` go after every dated record,
/// in their original relative order.
pub fn sort_by_first_read_desc(records: &mut [&PaperRecord]) {
    records.sort_by_cached_key(|r| newest_first_key(r));
}

/// Sort key putting later months first and undated records last
pub fn newest_first_key(record: &PaperRecord) -> Reverse<Option<DateKey>> {
    Reverse(record.first_read_key().ok())
}
