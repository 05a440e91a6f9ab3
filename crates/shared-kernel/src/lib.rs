// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, InputError, InputResult, LineFilterError, OutputError, OutputResult,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{ClassifiedLine, RunStatus, ValueType};
