//! Schedule-line splitting, validation, and per-field dispatch.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ScheduleError;
use crate::expand::expand_field;
use crate::field::Field;

/// Characters a field expression may contain.
///
/// `|` carries no grammar meaning but has always been accepted by this
/// check; it then fails numeric parsing inside the expression grammar.
const FIELD_CHARS_PATTERN: &str = r"^[0-9|/*,-]+$";

static FIELD_CHARS_REGEX: OnceLock<Regex> = OnceLock::new();

fn field_chars_regex() -> &'static Regex {
    FIELD_CHARS_REGEX.get_or_init(|| Regex::new(FIELD_CHARS_PATTERN).expect("invalid regex pattern"))
}

/// One expanded time field of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    /// Which time field this is.
    pub field: Field,
    /// The raw expression token from the input line.
    pub expression: String,
    /// The expanded values, strictly increasing and within bounds.
    pub values: Vec<u32>,
}

impl FieldValues {
    /// Returns the values as a space-separated decimal string.
    pub fn rendered(&self) -> String {
        self.values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A fully expanded schedule line: five time fields plus the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// The expanded time fields, in positional order.
    pub fields: Vec<FieldValues>,
    /// The trailing command text, passed through verbatim.
    pub command: String,
}

/// Parses a whole schedule line.
///
/// The line must contain five whitespace-separated field expressions,
/// optionally a four-digit year-like token (recognized and skipped), and
/// the command text. Fields are validated and expanded in positional order,
/// so the first reported error is deterministic.
///
/// # Example
/// ```
/// use cronex_expr::parse_schedule;
///
/// let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/backup.sh").unwrap();
/// assert_eq!(schedule.fields[0].rendered(), "0 15 30 45");
/// assert_eq!(schedule.command, "/usr/bin/backup.sh");
/// ```
pub fn parse_schedule(line: &str) -> Result<Schedule, ScheduleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < Field::all().len() + 1 {
        return Err(ScheduleError::MalformedSchedule);
    }

    let mut fields = Vec::with_capacity(Field::all().len());
    for (&field, &token) in Field::all().iter().zip(&tokens) {
        if !field_chars_regex().is_match(token) {
            return Err(ScheduleError::InvalidCharacters {
                field,
                token: token.to_string(),
            });
        }
        let values = expand_field(field, token).map_err(|source| ScheduleError::Field {
            field,
            token: token.to_string(),
            source,
        })?;
        fields.push(FieldValues {
            field,
            expression: token.to_string(),
            values,
        });
    }

    // A year-like token directly after the fields is skipped, unless it is
    // the last token on the line (then it is the command text itself).
    let rest = &tokens[Field::all().len()..];
    let command = if rest.len() > 1 && is_year_token(rest[0]) {
        rest[1..].join(" ")
    } else {
        rest.join(" ")
    };

    Ok(Schedule { fields, command })
}

fn is_year_token(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}
