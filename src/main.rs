//! `movegen` - Generator for the script-element moving-between-documents
//! test suite

use clap::Parser;

use movegen::cli::args::Cli;
use movegen::cli::commands;
use movegen::error::ExitCode;
use movegen::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
