use std::io;

use clap::Parser;
use salary_core::{FixedClock, SystemClock};
use tracing::debug;

use salary_cli::cli::Cli;
use salary_cli::{app, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(logging::level_for_verbosity(cli.verbose));
    debug!(?cli, "parsed arguments");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match cli.as_of {
        Some(now) => app::run(&cli, FixedClock(now), stdin, stdout),
        None => app::run(&cli, SystemClock, stdin, stdout),
    }
}
