// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;

pub use bootstrap::run_with_config;
pub use line_filter_domain::{OpenMode, OutputSettings, RunConfig, StatsMode};
pub use line_filter_shared_kernel::RunStatus;
