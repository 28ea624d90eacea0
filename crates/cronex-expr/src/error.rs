//! Error types for field expansion and schedule parsing.

use thiserror::Error;

use crate::field::Field;

/// Where a numeric sub-token sat when it failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPosition {
    /// A bare value token.
    Value,
    /// The start endpoint of a range.
    RangeStart,
    /// The end endpoint of a range.
    RangeEnd,
}

impl NumberPosition {
    /// Returns the position as a string for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberPosition::Value => "value",
            NumberPosition::RangeStart => "range start",
            NumberPosition::RangeEnd => "range end",
        }
    }
}

impl std::fmt::Display for NumberPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure inside a single field expression.
///
/// Every variant carries the offending sub-token (and bound values where
/// relevant) so callers can format or localize messages themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A numeric sub-token failed to parse as an integer.
    #[error("invalid number value provided for {position}: '{token}'")]
    InvalidNumber {
        /// The sub-token that failed to parse.
        token: String,
        /// Which grammatical slot the sub-token occupied.
        position: NumberPosition,
    },

    /// A parsed value or range endpoint falls outside the field's bounds.
    #[error("got {token}, expected values within {min}-{max}")]
    OutOfBounds {
        /// The value or range token that was checked.
        token: String,
        /// Smallest legal value for the field.
        min: u32,
        /// Largest legal value for the field.
        max: u32,
    },

    /// A range whose start is not strictly below its end.
    #[error("invalid range {start}-{end}: start must be below end")]
    InvalidRange {
        /// Parsed range start.
        start: u32,
        /// Parsed range end.
        end: u32,
    },

    /// A step interval that is non-numeric or not positive.
    #[error("invalid interval '{token}'")]
    InvalidInterval {
        /// The interval sub-token.
        token: String,
    },

    /// An expression or comma-separated sub-expression with no content.
    #[error("empty expression")]
    EmptyExpression,
}

/// Failure at the schedule-line level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The line does not have the five-fields-then-command shape.
    #[error("malformed schedule: expected five time fields followed by a command")]
    MalformedSchedule,

    /// A field token contains characters outside the permitted set.
    #[error("invalid characters in {field}: '{token}'")]
    InvalidCharacters {
        /// The field the token was destined for.
        field: Field,
        /// The raw token from the input line.
        token: String,
    },

    /// A field expression failed to expand.
    #[error("{field} error ({token}): {source}")]
    Field {
        /// The field whose expression failed.
        field: Field,
        /// The raw expression token.
        token: String,
        /// The underlying expansion failure.
        source: ExpandError,
    },
}
