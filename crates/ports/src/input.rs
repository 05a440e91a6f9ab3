// crates/ports/src/input.rs
use std::{io::BufRead, path::Path};

use line_filter_shared_kernel::InputResult;

/// Port for opening an input file as a stream of text lines.
pub trait LineSource {
    /// # Errors
    ///
    /// Returns an [`InputError`](line_filter_shared_kernel::InputError) classified
    /// by cause when `path` cannot be opened.
    fn open(&self, path: &Path) -> InputResult<Box<dyn BufRead>>;
}
