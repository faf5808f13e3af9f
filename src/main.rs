use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use heartwatch::report::{export_alerts, render_alerts};
use heartwatch::{detect_alerts, group_events, EventSource, FileSource, ReaderSource, Settings};

#[derive(Parser, Debug)]
#[command(name = "heartwatch")]
#[command(about = "Detect sustained service outages from heartbeat records")]
struct Args {
    /// Path to the heartbeat events JSON file ("-" reads stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between expected heartbeats
    #[arg(short, long)]
    interval: Option<f64>,

    /// Consecutive missed heartbeats that raise an alert
    #[arg(short = 'm', long)]
    allowed_misses: Option<u32>,

    /// Also write the alerts JSON to this file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(file) = args.file {
        settings.events_file = file;
    }
    if let Some(interval) = args.interval {
        settings.expected_interval_seconds = interval;
    }
    if let Some(misses) = args.allowed_misses {
        settings.allowed_misses = misses;
    }

    // Reject bad parameters before touching the input
    let policy = settings.policy()?;

    let mut source = open_source(&settings.events_file);
    let batch = source.load()?;
    info!(
        dropped = batch.dropped,
        "Loaded {} valid events from {}",
        batch.len(),
        source.description()
    );

    let timelines = group_events(batch.events);
    info!("Services found: {:?}", timelines.keys().collect::<Vec<_>>());

    let alerts = detect_alerts(&timelines, &policy);
    let rendered = render_alerts(&alerts, !args.compact)?;
    println!("{}", rendered);

    if let Some(export_path) = args.export {
        export_alerts(&export_path, &rendered)?;
        info!("Exported alerts to: {}", export_path.display());
    }

    Ok(())
}

/// Pick the event source for a path, `-` meaning stdin
fn open_source(path: &Path) -> Box<dyn EventSource> {
    if path == Path::new("-") {
        Box::new(ReaderSource::stdin())
    } else {
        Box::new(FileSource::new(path))
    }
}
