//! Globe builder CLI.
//!
//! Turns population grids into a BufferGeometry JSON document with one
//! morph target per additional dataset.

use anyhow::Result;
use clap::Parser;
use globe_builder::{run_job, JobConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "globe-builder")]
#[command(about = "Build globe box geometry from ASC population grids")]
struct Args {
    /// Job configuration file path
    #[arg(short, long, env = "GLOBE_JOB_CONFIG", default_value = "globe.yaml")]
    config: PathBuf,

    /// Output file (overrides the job's output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);
    if args.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    info!(config = %args.config.display(), "Starting globe builder");

    let config = JobConfig::load(&args.config)?;
    info!(
        sources = config.datasets.len(),
        derived = config.derived.len(),
        "Loaded job configuration"
    );

    let output = config.output_path(args.output.as_deref());
    run_job(&config, &output).await?;

    Ok(())
}
