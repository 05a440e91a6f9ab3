// crates/shared-kernel/tests/error_kinds.rs
use std::{io, path::Path};

use line_filter_shared_kernel::{InputError, LineFilterError, OutputError, RunStatus, ValueType};

#[test]
fn input_error_is_classified_by_io_kind() {
    let missing = InputError::from_io("a.txt", io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(missing, InputError::NotFound { .. }));
    assert_eq!(missing.to_string(), "No such file: a.txt");

    let denied = InputError::from_io("b.txt", io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(denied, InputError::AccessDenied { .. }));
    assert_eq!(denied.to_string(), "No rights to open this file: b.txt");

    let other = InputError::from_io("c.txt", io::Error::other("disk on fire"));
    assert_eq!(other.path(), Path::new("c.txt"));
    let display = other.to_string();
    assert!(display.starts_with("Unexpected error while working with file: c.txt"));
    assert!(display.contains("disk on fire"));
}

#[test]
fn permission_denied_directory_has_its_own_fatal_message() {
    let err = OutputError::from_dir_io("out", io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(err.fatal_diagnostic(), "No rights to write: out");

    let err = OutputError::from_dir_io("out", io::Error::other("not a directory"));
    let message = err.fatal_diagnostic();
    assert!(message.starts_with("Fatal output error: Cannot use output directory out"));
}

#[test]
fn close_error_mentions_suppressed_failures() {
    let channel = |value_type| OutputError::Channel {
        value_type,
        path: format!("{}.txt", ValueType::file_stem(value_type)).into(),
        source: io::Error::other("flush failed"),
    };
    let err = OutputError::Close {
        first: Box::new(channel(ValueType::Integer)),
        suppressed: vec![channel(ValueType::String)],
    };

    let display = err.to_string();
    assert!(display.starts_with("Cannot write values of type INTEGER to integers.txt"));
    assert!(display.contains("suppressed 1"));
    assert!(display.contains("STRING"));
}

#[test]
fn root_error_is_transparent() {
    let err: LineFilterError = InputError::from_io("x", io::Error::from(io::ErrorKind::NotFound)).into();
    assert_eq!(err.to_string(), "No such file: x");
}

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(RunStatus::Success.exit_code(), 0);
    assert_eq!(RunStatus::Failed.exit_code(), 1);
    assert_eq!(RunStatus::FatalOutput.exit_code(), 3);
    assert!(RunStatus::Success.is_success());
    assert!(!RunStatus::Failed.is_success());
}
