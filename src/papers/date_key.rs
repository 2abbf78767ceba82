use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{PaperError, PaperResult};

/// Month names indexed by `month - 1`
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter abbreviations, also used for bucket labels
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const TOKEN_SEPARATOR: &str = "::";

/// A (year, month) point parsed from a `"Month::Year"` token
///
/// Field order matters: the derived `Ord` compares `year` first, then `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    /// 1-based month
    month: u32,
}

impl DateKey {
    /// Build a key from a year and a 1-based month
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The key of the month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whole calendar months from `self` to `later`
    ///
    /// Negative when `later` is before `self`.
    pub fn months_until(&self, later: DateKey) -> i64 {
        (i64::from(later.year) - i64::from(self.year)) * 12
            + (i64::from(later.month) - i64::from(self.month))
    }

    /// Canonical bucket label, e.g. `"Jan-2024"`
    pub fn label(&self) -> String {
        format!("{}-{}", MONTH_ABBREVIATIONS[self.month as usize - 1], self.year)
    }

    /// Full month name, e.g. `"January"`
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .or_else(|| MONTH_ABBREVIATIONS.iter().position(|m| *m == name))
        .map(|idx| idx as u32 + 1)
}

impl FromStr for DateKey {
    type Err = PaperError;

    fn from_str(token: &str) -> PaperResult<Self> {
        let invalid = || PaperError::InvalidDateToken {
            token: token.to_string(),
        };

        let parts: Vec<&str> = token.split(TOKEN_SEPARATOR).collect();
        let [month_part, year_part] = parts.as_slice() else {
            return Err(invalid());
        };

        let month = month_from_name(month_part.trim()).ok_or_else(invalid)?;
        let year = year_part.trim().parse::<i32>().map_err(|_| invalid())?;

        Ok(Self { year, month })
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.month_name(), TOKEN_SEPARATOR, self.year)
    }
}
