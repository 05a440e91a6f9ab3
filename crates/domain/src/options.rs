// crates/domain/src/options.rs

/// How output files are opened, chosen once for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Truncate existing files.
    #[default]
    Overwrite,
    /// Keep existing content and write after it.
    Append,
}

impl OpenMode {
    #[inline]
    pub const fn from_append_flag(append: bool) -> Self {
        if append { Self::Append } else { Self::Overwrite }
    }
}

/// Which statistics are collected and reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsMode {
    #[default]
    None,
    Short,
    Full,
}
