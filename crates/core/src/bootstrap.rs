// crates/core/src/bootstrap.rs
use line_filter_domain::{RunConfig, collector_for};
use line_filter_infra::{FileLineSource, OutputRouter, StderrDiagnostics, StdoutPresenter};
use line_filter_shared_kernel::RunStatus;
use line_filter_usecase::FilterInputs;
use log::info;

/// Run the filter over `config.inputs` with the filesystem and console adapters.
///
/// Diagnostics go to stderr and the statistics report to stdout. The returned
/// status carries the process exit code.
pub fn run_with_config(config: &RunConfig) -> RunStatus {
    let diagnostics = StderrDiagnostics;
    let source = FileLineSource;
    let presenter = StdoutPresenter;
    let mut router = OutputRouter::new(config.output.clone(), &diagnostics);
    let mut stats = collector_for(config.stats);

    let status = FilterInputs::new(&source, &mut router, stats.as_mut(), &presenter, &diagnostics)
        .run(&config.inputs);

    info!("finished {} input(s): {status:?}", config.inputs.len());
    status
}
