// crates/domain/src/config.rs
use std::path::PathBuf;

use crate::options::{OpenMode, StatsMode};

/// Where and how the three category files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub out_dir: PathBuf,
    pub prefix: String,
    pub open_mode: OpenMode,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("."), prefix: String::new(), open_mode: OpenMode::default() }
    }
}

impl OutputSettings {
    /// `{prefix}{stem}.txt` resolved under the output directory.
    pub fn file_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{}{stem}.txt", self.prefix))
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub output: OutputSettings,
    pub stats: StatsMode,
}
