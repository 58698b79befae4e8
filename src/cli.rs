use crate::simulation::{Mode, SessionConfig};
use crate::utils::DEFAULT_CHUNK;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "langton_ant", about = "🐜 Langton's ant on a bounded tape")]
pub struct Args {
    /// Initialization file: `width height`, `x y orientation`, then `x y` black cells
    pub init_file: PathBuf,

    /// Run mode; asks interactively when omitted
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Total steps for batch/headless runs (0 = until the ant leaves the tape)
    #[arg(short = 'n', long)]
    pub steps: Option<u64>,

    /// Steps between renders in batch mode
    #[arg(long, default_value_t = DEFAULT_CHUNK, value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk: u64,

    /// Save the final state here instead of asking
    #[arg(short = 'o', long)]
    pub save: Option<PathBuf>,

    /// Blacken each cell with this probability (percent) before starting
    #[arg(long, value_parser = parse_percent)]
    pub random_fill: Option<f64>,

    /// Random seed for --random-fill
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable coloured output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode,
            total: self.steps,
            chunk: self.chunk,
            color: !self.no_color,
        }
    }
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not between 0 and 100", value))
    }
}
