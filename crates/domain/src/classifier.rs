// crates/domain/src/classifier.rs
use std::sync::OnceLock;

use line_filter_shared_kernel::ValueType;
use regex::Regex;

fn integer_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid integer regex"))
}

fn float_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").expect("valid float regex")
    })
}

/// Classify one input line.
///
/// Surrounding whitespace is ignored. The integer grammar is tried before the
/// float grammar, so `42` is an integer even though it is also a valid float.
/// Anything else, including a blank line, is a string.
pub fn classify(line: &str) -> ValueType {
    let s = line.trim();

    if s.is_empty() {
        return ValueType::String;
    }
    if integer_pattern().is_match(s) {
        return ValueType::Integer;
    }
    if float_pattern().is_match(s) {
        return ValueType::Float;
    }

    ValueType::String
}
