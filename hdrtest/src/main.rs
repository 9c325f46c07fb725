mod commands;
mod exit;
mod logging;
mod ops;
mod reports;

use eyre::Result;

use crate::{commands::Cli, exit::ExitStatus};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_or_usage();
    logging::init(cli.verbosity());

    if let Err(report) = cli.run() {
        eprintln!("Error: {:?}", report);
        std::process::exit(ExitStatus::from_report(&report).code());
    }

    Ok(())
}
