use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gp")]
#[command(about = "Government services portal: session and service catalog")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
