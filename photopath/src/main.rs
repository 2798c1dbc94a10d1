mod chain;
mod locate;
mod merge;
mod options;

use anyhow::Result;
use clap::Parser;
use options::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::init();

    match cli.cmd {
        Command::Chain(chain) => chain.run(),
        Command::Locate(locate) => locate.run(),
        Command::Merge(merge) => merge.run(),
    }
}
