use clap::Parser;
use modplan_logic::presets::Preset;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modplan-simtest")]
#[command(author, version, about)]
#[command(long_about = "Headless harness for the modplan layout engine.\n\n\
    Generates every preset end to end, validates the results and optionally\n\
    samples or exports them.\n\n\
    Examples:\n  \
    modplan-simtest                      Run all presets\n  \
    modplan-simtest --preset v1 -v       One preset, print every check\n  \
    modplan-simtest --sample 4 --seed 7  Show 4 random layouts per preset\n  \
    modplan-simtest --export planos.json Write viewer records")]
pub struct Cli {
    /// Preset to run (v1..v5); all presets when omitted
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Print passing checks and per-layout details
    #[arg(long, short)]
    pub verbose: bool,

    /// Print this many randomly sampled layouts per preset
    #[arg(long)]
    pub sample: Option<usize>,

    /// Seed for sampling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write all surviving layouts as plan records (JSON array)
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Search configuration file (JSON); defaults apply to missing keys
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn presets(&self) -> Vec<Preset> {
        match self.preset {
            Some(p) => vec![p],
            None => Preset::ALL.to_vec(),
        }
    }
}
