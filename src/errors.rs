//! Error types for SUS scoring and dataset validation.
//!
//! The library distinguishes item-level validation failures ([`SusError`])
//! from their row-level context ([`RowError`], which carries the 1-based
//! respondent index so the analyst can locate the offending source record).
//! I/O and CSV plumbing errors stay on `anyhow` at the command boundary.

use thiserror::Error;

/// A respondent's answer block cannot be scored.
///
/// Policy is strict rejection: a row that fails any of these checks never
/// receives a score, so aggregates are only ever computed over fully valid
/// data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SusError {
    /// The answer vector does not contain exactly ten items.
    #[error("expected 10 SUS items, found {actual}")]
    WrongItemCount { actual: usize },

    /// An answer lies outside the 1-5 Likert range.
    #[error("item {position}: value {value} is outside the Likert range 1-5")]
    OutOfRange { position: usize, value: i64 },

    /// An item cell does not parse as an integer.
    #[error("item {position} (column {column:?}): {value:?} is not an integer")]
    NonNumeric {
        position: usize,
        column: String,
        value: String,
    },
}

/// A [`SusError`] tied to the data row it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("respondent {respondent}: {source}")]
pub struct RowError {
    /// 1-based index of the data row (header row excluded).
    pub respondent: usize,
    #[source]
    pub source: SusError,
}

impl RowError {
    pub fn new(respondent: usize, source: SusError) -> Self {
        Self { respondent, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_item_count_message_names_expected_and_actual() {
        let err = SusError::WrongItemCount { actual: 9 };
        assert_eq!(err.to_string(), "expected 10 SUS items, found 9");
    }

    #[test]
    fn out_of_range_message_names_position() {
        let err = SusError::OutOfRange {
            position: 4,
            value: 7,
        };
        assert_eq!(
            err.to_string(),
            "item 4: value 7 is outside the Likert range 1-5"
        );
    }

    #[test]
    fn row_error_prefixes_respondent_index() {
        let err = RowError::new(12, SusError::WrongItemCount { actual: 3 });
        assert_eq!(
            err.to_string(),
            "respondent 12: expected 10 SUS items, found 3"
        );
    }
}
