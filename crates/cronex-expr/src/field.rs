//! Field identifiers and their numeric bounds.

use serde::{Deserialize, Serialize};

/// Inclusive numeric bounds for one time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest legal value.
    pub min: u32,
    /// Largest legal value.
    pub max: u32,
}

/// The five time fields of a schedule line, in positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Minute of the hour (0-59).
    Minute,
    /// Hour of the day (0-23).
    Hour,
    /// Day of the month (1-31).
    DayOfMonth,
    /// Month of the year (1-12).
    Month,
    /// Day of the week (0-6).
    DayOfWeek,
}

impl Field {
    /// Returns the field name as displayed in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "dayOfMonth",
            Field::Month => "month",
            Field::DayOfWeek => "dayOfWeek",
        }
    }

    /// Returns all fields in the positional order of a schedule line.
    pub fn all() -> &'static [Field] {
        &[
            Field::Minute,
            Field::Hour,
            Field::DayOfMonth,
            Field::Month,
            Field::DayOfWeek,
        ]
    }

    /// Returns the inclusive bounds for this field.
    pub const fn bounds(&self) -> Bounds {
        match self {
            Field::Minute => Bounds { min: 0, max: 59 },
            Field::Hour => Bounds { min: 0, max: 23 },
            Field::DayOfMonth => Bounds { min: 1, max: 31 },
            Field::Month => Bounds { min: 1, max: 12 },
            Field::DayOfWeek => Bounds { min: 0, max: 6 },
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Field::Minute),
            "hour" => Ok(Field::Hour),
            "dayOfMonth" => Ok(Field::DayOfMonth),
            "month" => Ok(Field::Month),
            "dayOfWeek" => Ok(Field::DayOfWeek),
            _ => Err(format!("unknown field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_table_matches_the_classic_crontab_ranges() {
        assert_eq!(Field::Minute.bounds(), Bounds { min: 0, max: 59 });
        assert_eq!(Field::Hour.bounds(), Bounds { min: 0, max: 23 });
        assert_eq!(Field::DayOfMonth.bounds(), Bounds { min: 1, max: 31 });
        assert_eq!(Field::Month.bounds(), Bounds { min: 1, max: 12 });
        assert_eq!(Field::DayOfWeek.bounds(), Bounds { min: 0, max: 6 });
    }

    #[test]
    fn bounds_are_well_formed() {
        for field in Field::all() {
            let bounds = field.bounds();
            assert!(bounds.min <= bounds.max, "{} has inverted bounds", field);
        }
    }

    #[test]
    fn all_is_in_schedule_line_order() {
        assert_eq!(
            Field::all(),
            &[
                Field::Minute,
                Field::Hour,
                Field::DayOfMonth,
                Field::Month,
                Field::DayOfWeek,
            ]
        );
    }

    #[test]
    fn name_round_trips_through_from_str() {
        for &field in Field::all() {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("year".parse::<Field>().is_err());
    }

    #[test]
    fn serializes_to_display_name() {
        let json = serde_json::to_string(&Field::DayOfMonth).unwrap();
        assert_eq!(json, "\"dayOfMonth\"");
    }
}
