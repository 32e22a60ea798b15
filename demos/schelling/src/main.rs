//! schelling — runs one Schelling segregation simulation and reports it.
//!
//! With no arguments this reproduces the classic setup: a 40×40 torus,
//! 1330 agents (30% kind A), thresholds A = 0.4 and B = 0.7, up to 100
//! iterations.  Set `RUST_LOG=debug` to see per-step counts.

mod params;

use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use sg_output::{ConsoleReport, CsvWriter, ReportObserver};
use sg_sim::SimBuilder;
use tracing::info;

use params::Args;

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = args.sim_config()?;

    let mut world = SimBuilder::new(config).build()?;

    let csv = if args.no_file { None } else { Some(CsvWriter::from_path(&args.out)?) };
    let console = if args.no_screen { None } else { Some(ConsoleReport::stdout()) };
    let mut obs = ReportObserver::new((console, csv));

    let t0 = Instant::now();
    let report = world.run(&mut obs)?;
    info!(
        stop_reason = %report.stop_reason,
        iterations = report.iterations,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "simulation complete",
    );

    if let Some(e) = obs.take_error() {
        bail!("output error: {e}");
    }
    if !args.no_file {
        println!("\nResults written to: {}", args.out.display());
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
