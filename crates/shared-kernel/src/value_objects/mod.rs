// crates/shared-kernel/src/value_objects/mod.rs
pub mod classified_line;
pub mod run_status;
pub mod value_type;

pub use classified_line::ClassifiedLine;
pub use run_status::RunStatus;
pub use value_type::ValueType;
