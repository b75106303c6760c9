//! `exq`: a terminal quiz on systematic absences and space-group symmetry.

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
