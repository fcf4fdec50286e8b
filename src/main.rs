use anyhow::Result;
use clap::Parser;

use savepick::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    savepick::app::run(cli)?;
    Ok(())
}
