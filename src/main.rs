//! Entry point for the `airbrush` CLI. It parses arguments, dispatches to
//! the command handler, and maps errors to exit codes.

use airbrush::cli::{Cli, usage_exit_code};
use airbrush::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err) as u8);
        }
    };

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
