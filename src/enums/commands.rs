use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the configuration file for problems
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Analyze the C# and VB.NET sources of a directory
    Analyze {
        path: PathBuf,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Validate { .. } => "validate",
            Commands::Analyze { .. } => "analyze",
        }
    }
}
