use logpuzzle_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    if std::env::args_os().len() <= 1 {
        eprint!("{}", Cli::usage());
        std::process::exit(1);
    }

    // Initialize logging as early as possible; fall back to stderr so the CLI doesn't crash.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("logpuzzle error: {:#}", err);
        std::process::exit(1);
    }
}
