//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag so other tools can consume the
//! expansion result or the failure diagnostics programmatically.

use serde::{Deserialize, Serialize};

use cronex_expr::{ExpandError, Schedule, ScheduleError};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Line shape does not match five fields plus a command
    pub const MALFORMED_SCHEDULE: &str = "CRON_001";
    /// Field token contains characters outside the grammar set
    pub const INVALID_CHARACTERS: &str = "CRON_002";
    /// Numeric sub-token failed to parse
    pub const INVALID_NUMBER: &str = "CRON_003";
    /// Value or range endpoint outside the field bounds
    pub const OUT_OF_BOUNDS: &str = "CRON_004";
    /// Range start not strictly below its end
    pub const INVALID_RANGE: &str = "CRON_005";
    /// Step interval non-numeric or not positive
    pub const INVALID_INTERVAL: &str = "CRON_006";
    /// Empty expression or empty comma-separated sub-expression
    pub const EMPTY_EXPRESSION: &str = "CRON_007";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CRON_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field the error belongs to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Raw token that caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl JsonError {
    /// Builds the structured error for a schedule parse failure.
    pub fn from_schedule_error(err: &ScheduleError) -> Self {
        match err {
            ScheduleError::MalformedSchedule => Self {
                code: error_codes::MALFORMED_SCHEDULE.to_string(),
                message: err.to_string(),
                field: None,
                token: None,
            },
            ScheduleError::InvalidCharacters { field, token } => Self {
                code: error_codes::INVALID_CHARACTERS.to_string(),
                message: err.to_string(),
                field: Some(field.as_str().to_string()),
                token: Some(token.clone()),
            },
            ScheduleError::Field {
                field,
                token,
                source,
            } => Self {
                code: expand_error_code(source).to_string(),
                message: err.to_string(),
                field: Some(field.as_str().to_string()),
                token: Some(token.clone()),
            },
        }
    }
}

fn expand_error_code(err: &ExpandError) -> &'static str {
    match err {
        ExpandError::InvalidNumber { .. } => error_codes::INVALID_NUMBER,
        ExpandError::OutOfBounds { .. } => error_codes::OUT_OF_BOUNDS,
        ExpandError::InvalidRange { .. } => error_codes::INVALID_RANGE,
        ExpandError::InvalidInterval { .. } => error_codes::INVALID_INTERVAL,
        ExpandError::EmptyExpression => error_codes::EMPTY_EXPRESSION,
    }
}

/// One expanded field in the JSON envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonField {
    /// Field name as displayed in the table (e.g., "dayOfMonth")
    pub name: String,
    /// Raw expression token from the input line
    pub expression: String,
    /// Expanded values, strictly increasing
    pub values: Vec<u32>,
}

/// Top-level envelope for `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpandOutput {
    /// Whether the schedule parsed and expanded cleanly
    pub success: bool,
    /// Expanded fields (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<JsonField>>,
    /// The trailing command text (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Structured error (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl ExpandOutput {
    /// Creates a success envelope from an expanded schedule.
    pub fn success(schedule: &Schedule) -> Self {
        let fields = schedule
            .fields
            .iter()
            .map(|fv| JsonField {
                name: fv.field.as_str().to_string(),
                expression: fv.expression.clone(),
                values: fv.values.clone(),
            })
            .collect();
        Self {
            success: true,
            fields: Some(fields),
            command: Some(schedule.command.clone()),
            error: None,
        }
    }

    /// Creates a failure envelope carrying a structured error.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            fields: None,
            command: None,
            error: Some(error),
        }
    }
}
