use std::path::Path;

use dayline_core::Schedule;

pub mod render;
pub mod schedule;
pub mod watch;

/// Load a schedule from a TOML file, or fall back to the built-in
/// example day when no path is given.
pub(crate) fn load_schedule(path: Option<&Path>) -> Result<Schedule, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)?;
            Ok(Schedule::from_toml_str(&text)?)
        }
        None => Ok(Schedule::example()),
    }
}
