//! cronex - command-line cron schedule field expander
//!
//! Takes a single schedule line ("min hour dayOfMonth month dayOfWeek
//! command") and prints each time field's expanded value set as a
//! two-column table.

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use cronex_cli::commands;

/// cronex - expand a cron schedule line into explicit per-field values
#[derive(Parser)]
#[command(name = "cronex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The schedule line: five time fields followed by a command,
    /// e.g. "*/15 0 1,15 * 1-5 /usr/bin/backup.sh"
    schedule: Option<String>,

    /// Output machine-readable JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(line) = cli.schedule else {
        eprintln!("not enough args");
        return ExitCode::from(1);
    };

    match commands::expand::run(&line, cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
