// crates/infra/src/console.rs
use std::io::{self, Write};

use line_filter_ports::{DiagnosticSink, ReportPresenter};

/// Writes diagnostics to standard error, one line each.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn emit(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Prints the statistics report to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPresenter;

impl ReportPresenter for StdoutPresenter {
    fn present(&self, report: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(report.as_bytes())?;
        out.flush()
    }
}
