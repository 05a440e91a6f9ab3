use std::path::{Path, PathBuf};

use line_filter_domain::{StatsCollector, classify};
use line_filter_ports::{DiagnosticSink, LineSource, OutputSink, ReportPresenter};
use line_filter_shared_kernel::{ClassifiedLine, InputError, LineFilterError, OutputError, Result, RunStatus};
use log::debug;

use crate::lines::text_lines;

/// Sequential filter pipeline over a list of input files.
pub struct FilterInputs<'a> {
    source: &'a dyn LineSource,
    sink: &'a mut dyn OutputSink,
    stats: &'a mut dyn StatsCollector,
    presenter: &'a dyn ReportPresenter,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> FilterInputs<'a> {
    pub fn new(
        source: &'a dyn LineSource,
        sink: &'a mut dyn OutputSink,
        stats: &'a mut dyn StatsCollector,
        presenter: &'a dyn ReportPresenter,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self { source, sink, stats, presenter, diagnostics }
    }

    /// Process `inputs` in order, then print the report and close the sink.
    ///
    /// Input failures are reported and skipped. An output failure that the
    /// sink cannot contain stops the loop; the report is printed regardless.
    pub fn run(&mut self, inputs: &[PathBuf]) -> RunStatus {
        let mut had_errors = false;
        let mut fatal: Option<OutputError> = None;

        for input in inputs {
            debug!("processing {}", input.display());
            match self.process_file(input) {
                Ok(file_had_errors) => had_errors |= file_had_errors,
                Err(LineFilterError::Output(err)) => {
                    fatal = Some(err);
                    break;
                }
                Err(err) => {
                    self.diagnostics.emit(&err.to_string());
                    had_errors = true;
                }
            }
        }

        if let Err(err) = self.presenter.present(&self.stats.report()) {
            self.diagnostics.emit(&format!("Cannot print statistics: {err}"));
            had_errors = true;
        }

        if let Err(err) = self.sink.close() {
            if fatal.is_none() {
                fatal = Some(err);
            } else {
                debug!("close failure after fatal error: {err}");
            }
        }

        if let Some(err) = fatal {
            self.diagnostics.emit(&err.fatal_diagnostic());
            return RunStatus::FatalOutput;
        }

        if had_errors { RunStatus::Failed } else { RunStatus::Success }
    }

    /// Returns whether any line of `path` was suppressed.
    fn process_file(&mut self, path: &Path) -> Result<bool> {
        let reader = self.source.open(path)?;
        let mut had_errors = false;

        for line in text_lines(reader) {
            let line = line.map_err(|source| InputError::from_io(path, source))?;
            let classified = ClassifiedLine::new(classify(&line), &line);

            if !self.sink.write(classified)? {
                had_errors = true;
                continue;
            }
            // Statistics failures never mark the run as failed.
            if let Err(err) = self.stats.accept(classified) {
                self.diagnostics.emit(&err.to_string());
            }
        }

        Ok(had_errors)
    }
}
