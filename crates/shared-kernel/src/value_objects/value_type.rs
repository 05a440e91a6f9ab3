// crates/shared-kernel/src/value_objects/value_type.rs
use std::fmt;

/// Classification bucket for one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    Integer,
    Float,
    String,
}

impl ValueType {
    /// Every category in output order.
    pub const ALL: [Self; 3] = [Self::Integer, Self::Float, Self::String];

    /// Dense index into per-category tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Integer => 0,
            Self::Float => 1,
            Self::String => 2,
        }
    }

    /// Stem of the output file name, before the `.txt` extension.
    #[inline]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Integer => "integers",
            Self::Float => "floats",
            Self::String => "strings",
        }
    }

    /// Numeric categories are written and parsed trimmed.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::String)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::String => "STRING",
        };
        f.write_str(name)
    }
}
