//! Expand command implementation
//!
//! Parses the schedule line and prints each field's expanded value set,
//! either as a two-column table or as a JSON envelope.

use anyhow::Result;
use std::process::ExitCode;

use cronex_expr::{parse_schedule, Schedule};

use super::json_output::{ExpandOutput, JsonError};

/// Width of the field-name column; the longest name plus tabwriter-style
/// padding.
const NAME_COLUMN_WIDTH: usize = 13;

/// Run the expand command
///
/// # Arguments
/// * `line` - The raw schedule line (five fields plus command)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the schedule expanded, 1 if it was rejected
pub fn run(line: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(line)
    } else {
        run_human(line)
    }
}

/// Run expand with the human-readable table output
fn run_human(line: &str) -> Result<ExitCode> {
    let schedule = parse_schedule(line)?;
    print!("{}", render_table(&schedule));
    Ok(ExitCode::SUCCESS)
}

/// Run expand with machine-readable JSON output
fn run_json(line: &str) -> Result<ExitCode> {
    let output = match parse_schedule(line) {
        Ok(schedule) => ExpandOutput::success(&schedule),
        Err(err) => ExpandOutput::failure(JsonError::from_schedule_error(&err)),
    };

    let json = serde_json::to_string_pretty(&output)
        .expect("ExpandOutput serialization should not fail");
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Renders the two-column report: one row per field, then the command.
fn render_table(schedule: &Schedule) -> String {
    let mut out = String::new();
    for fv in &schedule.fields {
        out.push_str(&format!(
            "{:<width$}{}\n",
            fv.field.as_str(),
            fv.rendered(),
            width = NAME_COLUMN_WIDTH
        ));
    }
    out.push_str(&format!(
        "{:<width$}{}\n",
        "command",
        schedule.command,
        width = NAME_COLUMN_WIDTH
    ));
    out
}
