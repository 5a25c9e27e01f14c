use std::path::PathBuf;

use clap::Args;
use dayline_core::{Clock, SystemClock, TimeOfDay, TimelineWidget};

#[derive(Args)]
pub struct RenderArgs {
    /// Render as if the time were HH:MM instead of now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,
    /// Schedule TOML file (defaults to the built-in example day)
    #[arg(long, value_name = "FILE")]
    pub schedule: Option<PathBuf>,
    /// Write the markup to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = super::load_schedule(args.schedule.as_deref())?;
    let now = match &args.at {
        Some(s) => s.parse::<TimeOfDay>()?,
        None => SystemClock.now(),
    };

    let widget = TimelineWidget::new(schedule);
    let html = widget.render_at(now);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)?;
            println!("wrote {} bytes to {}", html.len(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
