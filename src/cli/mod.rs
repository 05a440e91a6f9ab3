// src/cli/mod.rs
mod args;

use std::process::ExitCode;

pub use args::Args;
use clap::error::{ContextKind, ErrorKind};
use line_filter_core::{OpenMode, OutputSettings, RunConfig, StatsMode};

/// Exit code for invalid command lines.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Convert parsed CLI arguments into a run configuration.
pub fn build_config(args: Args) -> RunConfig {
    let stats = match (args.short_stats, args.full_stats) {
        (true, _) => StatsMode::Short,
        (_, true) => StatsMode::Full,
        _ => StatsMode::None,
    };

    RunConfig {
        inputs: args.inputs,
        output: OutputSettings {
            out_dir: args.out_dir,
            prefix: args.prefix.unwrap_or_default(),
            open_mode: OpenMode::from_append_flag(args.append),
        },
        stats,
    }
}

/// Text printed to stderr for a rejected command line.
///
/// Returns `None` for `--help` / `--version`, which clap renders itself.
pub fn usage_error_message(err: &clap::Error) -> Option<String> {
    let message = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return None,
        ErrorKind::UnknownArgument => {
            "Unknown option/parameter. Use option --help for additional information".to_string()
        }
        ErrorKind::MissingRequiredArgument => {
            let missing = err.get(ContextKind::InvalidArg).map(ToString::to_string).unwrap_or_default();
            format!("Lack of required parameters: {missing}\nUse option --help for additional information")
        }
        ErrorKind::ArgumentConflict => {
            "Options -s and -f are mutually exclusive (specify only one).\nUse --help for additional information"
                .to_string()
        }
        _ => format!("Unexpected message: {}", err.render().to_string().trim_end()),
    };
    Some(message)
}

/// Print a clap error in the tool's own wording and pick the exit code.
pub fn report_usage_error(err: &clap::Error) -> ExitCode {
    match usage_error_message(err) {
        None => {
            if let Err(print_err) = err.print() {
                log::debug!("cannot print help/version: {print_err}");
            }
            ExitCode::SUCCESS
        }
        Some(message) => {
            eprintln!("{message}");
            ExitCode::from(USAGE_EXIT_CODE)
        }
    }
}
