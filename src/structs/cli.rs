use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "roslyn-bridge")]
#[clap(about = "Runs C# and VB.NET analysis through a local Roslyn analyzer server", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
