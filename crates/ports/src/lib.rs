//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`input`]: opening input files as line readers
//! - [`output`]: routing classified lines to their destination
//! - [`diagnostics`]: user-facing warnings and errors
//! - [`report`]: printing the statistics report
//!
//! The use case layer is written against these traits only.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod input;
pub mod output;
pub mod report;

pub use diagnostics::DiagnosticSink;
pub use input::LineSource;
pub use output::OutputSink;
pub use report::ReportPresenter;
