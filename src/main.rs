// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use line_filter::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return cli::report_usage_error(&err),
    };

    let config = cli::build_config(args);
    log::debug!("resolved configuration: {config:?}");

    let status = line_filter_core::run_with_config(&config);
    if !status.is_success() {
        log::debug!("exiting with {status:?}");
    }
    ExitCode::from(status.exit_code())
}
