//! Error types for the paper domain

use thiserror::Error;

/// Errors raised by date parsing and aggregation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaperError {
    /// A `firstRead` token that is not `"<Month>::<Year>"`
    #[error("invalid date token '{token}', expected '<Month>::<Year>' (e.g. 'March::2023')")]
    InvalidDateToken { token: String },

    /// Percentages were requested over an empty record set
    #[error("cannot compute shares over an empty record set")]
    EmptyInput,
}

pub type PaperResult<T> = std::result::Result<T, PaperError>;
