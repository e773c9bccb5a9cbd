//! Error types for the sambat-format crate.

use sambat_calendar::CalendarError;

/// Error type for all fallible operations in the sambat-format crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Returned when a name lookup is asked for an index outside its table.
    #[error("no {kind} numbered {index} (must be 1..={max})")]
    UnknownName {
        /// What was looked up (`"month"` or `"weekday"`).
        kind: &'static str,
        /// The index that was provided.
        index: u8,
        /// Highest valid index.
        max: u8,
    },

    /// Returned when text does not read as a number in either digit set.
    #[error("not a number: {text:?}")]
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
    },

    /// Returned when date text does not split into year, month and day.
    #[error("cannot read {text:?} as a date: expected year, month and day")]
    MalformedDate {
        /// The text that failed to parse.
        text: String,
    },

    /// A calendar operation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
