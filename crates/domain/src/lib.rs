//! # Domain
//!
//! Pure logic of line_filter:
//!
//! - [`classifier`]: maps a line to [`ValueType`](line_filter_shared_kernel::ValueType)
//! - [`statistics`]: the none/short/full statistics collectors
//! - [`config`] and [`options`]: the resolved run configuration
//!
//! Nothing here performs I/O.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classifier;
pub mod config;
pub mod options;
pub mod statistics;

pub use classifier::classify;
pub use config::{OutputSettings, RunConfig};
pub use options::{OpenMode, StatsMode};
pub use statistics::{StatsCollector, collector_for};
