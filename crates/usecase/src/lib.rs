//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads every input, classifies and routes its lines,
//!   feeds the statistics collector and settles the run status
//! - [`lines`]: line splitting on `\n`, `\r\n` and lone `\r`
//!
//! Use cases depend on the domain and on ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod lines;
pub mod orchestrator;

pub use orchestrator::FilterInputs;
