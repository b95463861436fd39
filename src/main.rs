//! stroke-replay: run a recorded pen stream through the stabilizer

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stroke_stabilizer::config::{load_config, Algorithm};
use stroke_stabilizer::replay::{replay_file, ReplayFormat};
use stroke_stabilizer::StabilizerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "stroke-replay",
    version,
    about = "Replay recorded pen input through the stroke stabilizer"
)]
struct Args {
    /// Recorded input stream
    input: PathBuf,

    /// Where to write the filtered stream
    output: PathBuf,

    /// key=value configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recording format
    #[arg(short, long, value_enum, default_value = "evdev")]
    format: ReplayFormat,

    /// Override the configured algorithm
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Override the configured strength (0.0 - 1.0)
    #[arg(short, long)]
    strength: Option<f64>,
}

fn main() -> Result<()> {
    stroke_stabilizer::init_tracing();
    let args = Args::parse();

    tracing::info!("Starting stroke-replay v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => {
            load_config(path).with_context(|| format!("Failed to load config {:?}", path))?
        }
        None => StabilizerConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config = config.with_algorithm(algorithm);
    }
    if let Some(strength) = args.strength {
        config = config.with_strength(strength);
    }

    let stats = replay_file(&args.input, &args.output, args.format, config)
        .with_context(|| format!("Failed to replay {:?}", args.input))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("Failed to serialize replay stats")?
    );
    Ok(())
}
