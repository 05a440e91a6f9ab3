// crates/shared-kernel/src/value_objects/classified_line.rs
use super::ValueType;

/// A raw input line paired with its category. Lives only for one routing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub value_type: ValueType,
    pub raw: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    #[inline]
    pub const fn new(value_type: ValueType, raw: &'a str) -> Self {
        Self { value_type, raw }
    }

    /// Text as it goes to the output file: trimmed for numbers, verbatim for strings.
    #[inline]
    pub fn output_text(&self) -> &'a str {
        if self.value_type.is_numeric() { self.raw.trim() } else { self.raw }
    }
}
