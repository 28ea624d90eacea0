//! The field expansion engine.
//!
//! A field expression is a comma-separated union of atoms. Each atom is a
//! bare number, a `start-end` range, or either of those followed by a `/step`
//! interval. `*` stands for the field's full bounds range and is substituted
//! textually before any other parsing, so `*/5` is handled by the stepped
//! range form.

use crate::error::{ExpandError, NumberPosition};
use crate::field::Field;

/// Step applied when an atom carries no explicit `/interval`.
const DEFAULT_INTERVAL: &str = "1";

/// Expands a field expression into its sorted, deduplicated value set.
///
/// # Arguments
/// * `field` - The field the expression belongs to; fixes the bounds.
/// * `expression` - The raw expression token, e.g. `"*/15,33"`.
///
/// # Returns
/// The matching values in strictly increasing order, or the first
/// sub-expression's error (all-or-nothing; no partial results).
///
/// # Example
/// ```
/// use cronex_expr::{expand_field, Field};
///
/// let values = expand_field(Field::Minute, "*/15,33").unwrap();
/// assert_eq!(values, vec![0, 15, 30, 33, 45]);
/// ```
pub fn expand_field(field: Field, expression: &str) -> Result<Vec<u32>, ExpandError> {
    let bounds = field.bounds();
    let full_range = format!("{}-{}", bounds.min, bounds.max);
    let expression = expression.replace('*', &full_range);

    if expression.is_empty() {
        return Err(ExpandError::EmptyExpression);
    }

    let mut values = Vec::new();
    for sub in expression.split(',') {
        if sub.is_empty() {
            return Err(ExpandError::EmptyExpression);
        }
        values.extend(expand_repeat(field, sub)?);
    }

    values.sort_unstable();
    values.dedup();
    Ok(values)
}

/// Expands one atom, interpreting an optional `/` step interval.
///
/// A purely numeric base before the `/` is shorthand for "starting at base,
/// through the field's maximum" and is rewritten to an explicit range before
/// delegating. Everything else is passed through so [`expand_range`] stays
/// interval-agnostic.
fn expand_repeat(field: Field, token: &str) -> Result<Vec<u32>, ExpandError> {
    match token.split_once('/') {
        Some((base, interval)) => {
            if base.bytes().all(|b| b.is_ascii_digit()) {
                let rewritten = format!("{}-{}", base, field.bounds().max);
                expand_range(field, &rewritten, interval)
            } else {
                expand_range(field, base, interval)
            }
        }
        None => expand_range(field, token, DEFAULT_INTERVAL),
    }
}

/// Expands a bare number or a `start-end` range with the given interval.
fn expand_range(field: Field, token: &str, interval: &str) -> Result<Vec<u32>, ExpandError> {
    let bounds = field.bounds();

    let Some((start, end)) = token.split_once('-') else {
        let value = parse_number(token, NumberPosition::Value)?;
        if value < bounds.min || value > bounds.max {
            return Err(out_of_bounds(token, field));
        }
        return Ok(vec![value]);
    };

    let start = parse_number(start, NumberPosition::RangeStart)?;
    let end = parse_number(end, NumberPosition::RangeEnd)?;

    if start < bounds.min || end > bounds.max {
        return Err(out_of_bounds(token, field));
    }
    // Single-point ranges are rejected: start must be strictly below end.
    if start >= end {
        return Err(ExpandError::InvalidRange { start, end });
    }

    let step = interval
        .parse::<u32>()
        .ok()
        .filter(|step| *step > 0)
        .ok_or_else(|| ExpandError::InvalidInterval {
            token: interval.to_string(),
        })?;

    Ok((start..=end).step_by(step as usize).collect())
}

fn parse_number(token: &str, position: NumberPosition) -> Result<u32, ExpandError> {
    token.parse::<u32>().map_err(|_| ExpandError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

fn out_of_bounds(token: &str, field: Field) -> ExpandError {
    let bounds = field.bounds();
    ExpandError::OutOfBounds {
        token: token.to_string(),
        min: bounds.min,
        max: bounds.max,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(field: Field, expression: &str) -> String {
        expand_field(field, expression)
            .unwrap()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn expands_known_expressions() {
        let cases = [
            (Field::Minute, "8/16", "8 24 40 56"),
            (Field::Minute, "*/15,33", "0 15 30 33 45"),
            (Field::Minute, "1/10,20-23", "1 11 20 21 22 23 31 41 51"),
            (Field::Minute, "20-30/5", "20 25 30"),
            (Field::Hour, "0", "0"),
            (Field::Hour, "*/6", "0 6 12 18"),
            (Field::DayOfMonth, "1,15", "1 15"),
            (Field::Month, "*", "1 2 3 4 5 6 7 8 9 10 11 12"),
            (Field::DayOfWeek, "1-5", "1 2 3 4 5"),
        ];

        for (field, expression, want) in cases {
            assert_eq!(
                rendered(field, expression),
                want,
                "{} {}",
                field,
                expression
            );
        }
    }

    #[test]
    fn wildcard_expands_to_the_full_bounds_range() {
        for &field in Field::all() {
            let bounds = field.bounds();
            let want: Vec<u32> = (bounds.min..=bounds.max).collect();
            assert_eq!(expand_field(field, "*").unwrap(), want);
        }
    }

    #[test]
    fn union_of_sub_expressions_is_the_sorted_deduplicated_union() {
        let a = expand_field(Field::Minute, "10-20/5").unwrap();
        let b = expand_field(Field::Minute, "15,3").unwrap();
        let combined = expand_field(Field::Minute, "10-20/5,15,3").unwrap();

        let mut want: Vec<u32> = a.into_iter().chain(b).collect();
        want.sort_unstable();
        want.dedup();
        assert_eq!(combined, want);
        assert_eq!(combined, vec![3, 10, 15, 20]);
    }

    #[test]
    fn expansion_is_idempotent() {
        let first = expand_field(Field::Minute, "1/10,20-23").unwrap();
        let second = expand_field(Field::Minute, "1/10,20-23").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_is_strictly_increasing_and_within_bounds() {
        let values = expand_field(Field::Minute, "40-50/3,0,45,*/20").unwrap();
        let bounds = Field::Minute.bounds();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(values
            .iter()
            .all(|v| *v >= bounds.min && *v <= bounds.max));
    }

    #[test]
    fn bare_step_runs_from_the_start_value_to_the_field_maximum() {
        assert_eq!(rendered(Field::Minute, "50/3"), "50 53 56 59");
        assert_eq!(rendered(Field::DayOfWeek, "2/2"), "2 4 6");
    }

    #[test]
    fn non_numeric_value_is_invalid_number() {
        assert_eq!(
            expand_field(Field::Hour, "zxc"),
            Err(ExpandError::InvalidNumber {
                token: "zxc".to_string(),
                position: NumberPosition::Value,
            })
        );
    }

    #[test]
    fn range_endpoints_must_be_numeric() {
        assert_eq!(
            expand_field(Field::Minute, "x-5"),
            Err(ExpandError::InvalidNumber {
                token: "x".to_string(),
                position: NumberPosition::RangeStart,
            })
        );
        assert_eq!(
            expand_field(Field::Minute, "5-x"),
            Err(ExpandError::InvalidNumber {
                token: "x".to_string(),
                position: NumberPosition::RangeEnd,
            })
        );
    }

    #[test]
    fn value_outside_bounds_is_rejected() {
        assert_eq!(
            expand_field(Field::DayOfMonth, "33"),
            Err(ExpandError::OutOfBounds {
                token: "33".to_string(),
                min: 1,
                max: 31,
            })
        );
    }

    #[test]
    fn range_outside_bounds_is_rejected() {
        assert_eq!(
            expand_field(Field::Minute, "20-66"),
            Err(ExpandError::OutOfBounds {
                token: "20-66".to_string(),
                min: 0,
                max: 59,
            })
        );
        // A failing sub-expression discards the whole field.
        assert_eq!(
            expand_field(Field::Minute, "1/10,20-66"),
            Err(ExpandError::OutOfBounds {
                token: "20-66".to_string(),
                min: 0,
                max: 59,
            })
        );
    }

    #[test]
    fn single_point_range_is_rejected() {
        assert_eq!(
            expand_field(Field::Minute, "5-5"),
            Err(ExpandError::InvalidRange { start: 5, end: 5 })
        );
        assert_eq!(
            expand_field(Field::Minute, "10-5"),
            Err(ExpandError::InvalidRange { start: 10, end: 5 })
        );
    }

    #[test]
    fn interval_must_be_a_positive_integer() {
        for interval in ["0", "x", "-2", ""] {
            assert_eq!(
                expand_field(Field::Minute, &format!("1-5/{}", interval)),
                Err(ExpandError::InvalidInterval {
                    token: interval.to_string(),
                }),
                "interval '{}'",
                interval
            );
        }
    }

    #[test]
    fn range_validity_is_checked_before_the_interval() {
        assert_eq!(
            expand_field(Field::Minute, "5-4/0"),
            Err(ExpandError::InvalidRange { start: 5, end: 4 })
        );
    }

    #[test]
    fn extra_dash_lands_in_the_range_end_and_fails_parsing() {
        assert_eq!(
            expand_field(Field::Minute, "1-2-3"),
            Err(ExpandError::InvalidNumber {
                token: "2-3".to_string(),
                position: NumberPosition::RangeEnd,
            })
        );
    }

    #[test]
    fn empty_expressions_are_rejected_before_expansion() {
        assert_eq!(
            expand_field(Field::Minute, ""),
            Err(ExpandError::EmptyExpression)
        );
        assert_eq!(
            expand_field(Field::Minute, "1,,2"),
            Err(ExpandError::EmptyExpression)
        );
        assert_eq!(
            expand_field(Field::Minute, ",1"),
            Err(ExpandError::EmptyExpression)
        );
    }

    #[test]
    fn step_with_missing_base_fails_in_the_range_start_position() {
        // "/5" rewrites its empty base to "-<max>", so the start slot is
        // empty and fails numeric parsing.
        assert_eq!(
            expand_field(Field::Minute, "/5"),
            Err(ExpandError::InvalidNumber {
                token: "".to_string(),
                position: NumberPosition::RangeStart,
            })
        );
    }
}
