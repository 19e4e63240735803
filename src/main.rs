//! CLI entry point for the concurrent flood fill generator

use clap::Parser;
use floodgrid::io::cli::{Cli, Runner};

fn main() -> floodgrid::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.init_logging()?;
    runner.process()?;
    Ok(())
}
