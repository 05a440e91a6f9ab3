// crates/ports/src/report.rs
use std::io;

pub trait ReportPresenter {
    /// # Errors
    ///
    /// Returns the underlying write error.
    fn present(&self, report: &str) -> io::Result<()>;
}
