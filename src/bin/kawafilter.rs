use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use kawafilter::{condition, io::{write_signal, SignalFile}, ConditionConfig, DEFAULT_SAMPLES_TO_ADD};

#[derive(Parser)]
#[command(name = "kawafilter", about = "Condition a single-channel signal (high-cut, Fourier low-pass, baseline)")]
struct Args {
    /// Input safetensors file with a `signal` tensor
    #[arg(long)]
    input: PathBuf,

    /// Output safetensors path
    #[arg(long)]
    output: PathBuf,

    /// Pass-band half-width in frequency bins (default: 400)
    #[arg(long, default_value_t = 400)]
    fcut: usize,

    /// Constant edge padding on each side (default: 2000)
    #[arg(long, default_value_t = DEFAULT_SAMPLES_TO_ADD)]
    samples_to_add: usize,

    /// Replace samples above this value by interpolation
    #[arg(long)]
    hcut: Option<f64>,

    /// Normalise by the mean of the first N filtered samples
    #[arg(long)]
    baseline_end: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = SignalFile::load(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    info!("Loaded {} samples from {}", raw.signal.len(), args.input.display());

    let cfg = ConditionConfig {
        hcut: args.hcut,
        fcut: args.fcut,
        samples_to_add: args.samples_to_add,
        baseline_end: args.baseline_end,
    };

    let out = condition(&raw.signal, &cfg).context("conditioning failed")?;
    if let Some(b) = out.baseline {
        info!("Baseline = {b}");
    }

    write_signal(&args.output, &out.signal, out.baseline)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Written → {}", args.output.display());

    Ok(())
}
