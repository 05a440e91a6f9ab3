// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod console;
pub mod output;
pub mod persistence;
pub mod platform;

pub use console::{StderrDiagnostics, StdoutPresenter};
pub use output::{ChannelOpener, FileOpener, OutputRouter};
pub use persistence::FileLineSource;
