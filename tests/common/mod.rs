// tests/common/mod.rs
//! Shared helpers for the CLI integration tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

#[cfg(windows)]
pub const NL: &str = "\r\n";
#[cfg(not(windows))]
pub const NL: &str = "\n";

/// Temporary directory holding input files and an `out/` directory.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap_or_else(|e| panic!("cannot create temp dir: {e}")) }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("cannot create {}: {e}", path.display()));
        path
    }

    pub fn read_output(&self, name: &str) -> String {
        let path = self.out_dir().join(name);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
    }

    /// The binary, started inside the workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_line_filter"));
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}

/// Join lines with the platform terminator, including a trailing one.
pub fn lines(text: &[&str]) -> String {
    text.iter().map(|l| format!("{l}{NL}")).collect()
}
