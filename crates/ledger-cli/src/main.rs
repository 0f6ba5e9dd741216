//! Image Ledger CLI
//!
//! Parses the typed command line, hands the flattened tokens to the
//! dispatcher and exits with its status. Stdout carries exactly one
//! `<TAG> <json>` line; diagnostics go to stderr.

mod cli;
mod error;
mod logging;

use std::io;

use cli::Cli;

fn main() {
    let cli = Cli::parse_known();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(verbose = cli.verbose, "Starting ledger");

    let tokens = cli.into_tokens();
    let code = ledger_core::run_command(&tokens, &mut io::stdout().lock());
    std::process::exit(code);
}
