// crates/shared-kernel/src/error.rs
use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::value_objects::ValueType;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LineFilterError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, LineFilterError>;

/// Failures while opening or reading one input file. Always contained to that file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No such file: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No rights to open this file: {}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unexpected error while working with file: {}\n{source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

impl InputError {
    /// Classify an I/O failure on `path` by its kind.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. } | Self::AccessDenied { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

/// Output-side failures.
///
/// `Channel` is contained to one category; every other variant aborts the run.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot use output directory {}: {source}", path.display())]
    DirectoryUnusable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No rights to write: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write values of type {value_type} to {}: {source}", path.display())]
    Channel {
        value_type: ValueType,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{first}{}", suppressed_note(suppressed))]
    Close {
        #[source]
        first: Box<OutputError>,
        suppressed: Vec<OutputError>,
    },
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;

impl OutputError {
    /// Map a failure to prepare the output directory at `path`.
    pub fn from_dir_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::DirectoryUnusable { path, source }
        }
    }

    /// Line printed to stderr when this error ends the run.
    pub fn fatal_diagnostic(&self) -> String {
        match self {
            Self::PermissionDenied { .. } => self.to_string(),
            other => format!("Fatal output error: {other}"),
        }
    }
}

fn suppressed_note(suppressed: &[OutputError]) -> String {
    match suppressed.len() {
        0 => String::new(),
        n => {
            let details: Vec<String> = suppressed.iter().map(ToString::to_string).collect();
            format!(" (suppressed {n}: {})", details.join("; "))
        }
    }
}

/// Domain-layer errors. None of them fail the run.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Error while parsing {kind}: [{text}] This number will not appear in statistics ({details})")]
    NumberParse {
        kind: &'static str,
        text: String,
        details: String,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
