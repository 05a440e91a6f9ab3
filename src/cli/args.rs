// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_filter",
    version = crate::VERSION,
    about = "Filters mixed file contents into integers/floats/strings output files.",
    group(
        ArgGroup::new("stats_mode")
            .args(["short_stats", "full_stats"])
            .multiple(false)
    )
)]
pub struct Args {
    /// Output directory (default: current)
    #[arg(short = 'o', value_name = "DIR", default_value = ".", value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Prefix for all output files (default: none)
    #[arg(short = 'p', value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a')]
    pub append: bool,

    /// Short statistics: number of values per type
    #[arg(short = 's')]
    pub short_stats: bool,

    /// Full statistics: min/max/sum/average for numbers, length bounds for strings
    #[arg(short = 'f')]
    pub full_stats: bool,

    /// Input files, processed in the given order
    #[arg(value_name = "FILE", required = true, value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,
}
