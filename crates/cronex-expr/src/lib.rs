//! Cron schedule field expansion.
//!
//! This crate parses one cron-style schedule line (five time fields plus a
//! trailing command) and expands each field expression into its explicit
//! sorted set of matching integers.
//!
//! # Overview
//!
//! A field expression is a comma-separated union of atoms:
//!
//! - a bare value: `5`
//! - a range: `4-8`
//! - a step from a start value through the field maximum: `14/5`
//! - a stepped range: `10-40/10`
//! - the full bounds range: `*` (so `*/15` is "every 15 units")
//!
//! Every expanded set is deduplicated, sorted ascending, and checked
//! against the field's inclusive bounds. The command portion of the line
//! is opaque text and is never parsed.
//!
//! # Example
//!
//! ```
//! use cronex_expr::{expand_field, parse_schedule, Field};
//!
//! let minutes = expand_field(Field::Minute, "*/15").unwrap();
//! assert_eq!(minutes, vec![0, 15, 30, 45]);
//!
//! let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/backup.sh").unwrap();
//! assert_eq!(schedule.command, "/usr/bin/backup.sh");
//! ```
//!
//! # Modules
//!
//! - [`field`]: field identifiers and the bounds table
//! - [`expand`]: the expression grammar and expansion engine
//! - [`schedule`]: whole-line splitting, validation, and dispatch
//! - [`error`]: structured error types for both layers

pub mod error;
pub mod expand;
pub mod field;
pub mod schedule;

// Re-export commonly used items at the crate root
pub use error::{ExpandError, NumberPosition, ScheduleError};
pub use expand::expand_field;
pub use field::{Bounds, Field};
pub use schedule::{parse_schedule, FieldValues, Schedule};
