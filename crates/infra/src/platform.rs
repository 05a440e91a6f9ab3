// crates/infra/src/platform.rs
//! Platform-specific constants kept in one place.

/// Terminator appended to every line written to an output file.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Terminator appended to every line written to an output file.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
