mod cli;

use anyhow::Result;
use clap::Parser;

use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    rn_advisor::logging::init(cli.verbose);
    cli::dispatch::dispatch(cli)
}
