use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "ailinter")]
#[clap(about = "Submit code to the AILinter analysis service and show its suggestions", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/ailinter/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis service address, overriding configuration and environment
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Log protocol details
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
