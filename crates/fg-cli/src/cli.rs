use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "flag-game")]
#[command(about = "Guess the Flag in your terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
