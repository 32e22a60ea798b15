//! Run parameters: JSON file (optional) with command-line overrides on top.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sg_core::{Neighborhood, SimConfig};

/// Schelling segregation model on a toroidal grid.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// JSON file with `SimConfig` fields; missing fields use the defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Iteration budget.
    #[arg(long)]
    pub max_iter: Option<u64>,

    /// Unhappy agents move to a random vacancy instead of the first good one.
    #[arg(long)]
    pub forced: bool,

    /// Count only the four cardinal cells as neighbors.
    #[arg(long)]
    pub von_neumann: bool,

    /// Where to write the CSV results.
    #[arg(long, default_value = "results.csv")]
    pub out: PathBuf,

    /// Skip the console summary.
    #[arg(long)]
    pub no_screen: bool,

    /// Skip the CSV file.
    #[arg(long)]
    pub no_file: bool,
}

impl Args {
    /// Resolve the final config: defaults ← file ← flags.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max_iter) = self.max_iter {
            config.max_iter = max_iter;
        }
        if self.forced {
            config.forced_moves = true;
        }
        if self.von_neumann {
            config.neighborhood = Neighborhood::VonNeumann;
        }
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_config(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

fn parse_config<R: std::io::Read>(reader: R) -> Result<SimConfig> {
    Ok(serde_json::from_reader(reader)?)
}
