use std::path::PathBuf;

use clap::Args;
use dayline_core::{mount, Surface, SystemClock, TimelineWidget, REFRESH_PERIOD};

#[derive(Args)]
pub struct WatchArgs {
    /// Schedule TOML file (defaults to the built-in example day)
    #[arg(long, value_name = "FILE")]
    pub schedule: Option<PathBuf>,
    /// File to rewrite on every refresh
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,
}

/// File-backed surface: every refresh rewrites the whole file.
struct FileSurface {
    path: PathBuf,
}

impl Surface for FileSurface {
    fn replace_content(&mut self, html: &str) {
        // a failed write is superseded by the next tick anyway
        if let Err(e) = std::fs::write(&self.path, html) {
            tracing::warn!("failed to write {}: {e}", self.path.display());
        }
    }
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = super::load_schedule(args.schedule.as_deref())?;
    let widget = TimelineWidget::new(schedule);
    let surface = FileSurface {
        path: args.out.clone(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let mounted = mount(widget, surface, SystemClock);
        println!(
            "rendering to {} every {}s, Ctrl-C to stop",
            args.out.display(),
            REFRESH_PERIOD.as_secs()
        );
        tokio::signal::ctrl_c().await?;
        mounted.unmount();
        Ok::<(), std::io::Error>(())
    })?;
    println!("stopped");
    Ok(())
}
