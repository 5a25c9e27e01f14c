use std::path::PathBuf;

use clap::Subcommand;
use dayline_core::Schedule;
use serde::Serialize;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Print the resolved schedule
    Show {
        /// Schedule TOML file (defaults to the built-in example day)
        #[arg(long, value_name = "FILE")]
        schedule: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a schedule file and print a validation report
    Validate {
        /// Schedule TOML file (defaults to the built-in example day)
        #[arg(long, value_name = "FILE")]
        schedule: Option<PathBuf>,
        /// Suppress the report and rely on the exit code
        #[arg(long)]
        quiet: bool,
    },
    /// Write the built-in example day to a TOML file
    Init {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Show { schedule, json } => {
            let schedule = super::load_schedule(schedule.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                for entry in schedule.entries() {
                    let label = if entry.short_break {
                        "(short break)"
                    } else {
                        entry.label.as_str()
                    };
                    println!("{}-{}  {}", entry.start, entry.end, label);
                }
                println!("{} entries, {} minutes", schedule.len(), schedule.total_minutes());
            }
        }
        ScheduleAction::Validate { schedule, quiet } => {
            // load failures go into the report, not up the error path
            let loaded = match schedule.as_deref() {
                Some(p) => std::fs::read_to_string(p)
                    .map_err(|e| e.to_string())
                    .and_then(|text| Schedule::from_toml_str(&text).map_err(|e| e.to_string())),
                None => Ok(Schedule::example()),
            };

            let report = match &loaded {
                Ok(s) => ValidationReport {
                    valid: true,
                    entries: s.len(),
                    error: None,
                },
                Err(message) => ValidationReport {
                    valid: false,
                    entries: 0,
                    error: Some(message.clone()),
                },
            };

            if !quiet {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            if !report.valid {
                std::process::exit(1);
            }
        }
        ScheduleAction::Init { path, force } => {
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            let toml = Schedule::example().to_toml_string()?;
            std::fs::write(&path, toml)?;
            println!("wrote example schedule to {}", path.display());
        }
    }
    Ok(())
}
