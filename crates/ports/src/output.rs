// crates/ports/src/output.rs
use line_filter_shared_kernel::{ClassifiedLine, OutputResult};

/// Port owning the per-category output channels.
pub trait OutputSink {
    /// Route one line to its category.
    ///
    /// Returns `Ok(true)` when written and `Ok(false)` when the category has
    /// been disabled by an earlier failure.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that must abort the whole run.
    fn write(&mut self, line: ClassifiedLine<'_>) -> OutputResult<bool>;

    /// Flush and release every open channel.
    ///
    /// # Errors
    ///
    /// Returns the first close failure with the remaining ones attached.
    fn close(&mut self) -> OutputResult<()>;
}
