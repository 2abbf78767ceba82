use serde::{Deserialize, Serialize};
use std::fmt;

use super::date_key::DateKey;
use crate::error::PaperResult;

/// Reader-assigned confidence, either a number or a free-text label
///
/// Opaque to filtering and aggregation; rendered exactly as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(n) => write!(f, "{}", n),
            Confidence::Text(s) => f.write_str(s),
        }
    }
}

/// One paper entry from the input file
///
/// Field names follow the JSON input (`timesRead`, `firstRead`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub title: String,
    pub category: String,
    pub times_read: u32,
    pub printed: bool,
    pub confidence: Confidence,
    /// `"Month::Year"` token, e.g. `"March::2023"`
    pub first_read: String,
}

impl PaperRecord {
    /// Parse `first_read` into a comparable key
    pub fn first_read_key(&self) -> PaperResult<DateKey> {
        self.first_read.parse()
    }

    /// Printed and read at least once
    pub fn is_printed_and_read(&self) -> bool {
        self.printed && self.times_read >= 1
    }
}
