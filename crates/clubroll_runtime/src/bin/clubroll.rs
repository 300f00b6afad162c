//! Clubroll CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use clubroll_foundation::Result;
use clubroll_runtime::{Cli, Repl, Session, format, logging};
use tracing::debug;

/// Exit code for a command the roster refused.
const REJECTED: u8 = 1;
/// Exit code for I/O, codec, remote-store, and partial-move failures.
const FAILED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(&config);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_rejection() => {
            eprintln!("rejected: {e}");
            ExitCode::from(REJECTED)
        }
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::from(FAILED)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.command()?;
    let mut session = Session::open(&cli.config())?;
    debug!(
        clubs = session.roster().len(),
        players = session.roster().player_count(),
        "roster ready"
    );

    match command {
        Some(command) => {
            let outcome = session.execute(command)?;
            println!("{}", format::render(&outcome)?);
            Ok(())
        }
        None => Repl::new()?.with_session(session).run(),
    }
}
