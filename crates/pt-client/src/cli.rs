use crate::commands::Commands;

use clap::Parser;

/// Command-line interface for the project tracker API
#[derive(Parser)]
#[command(name = "pt", about = "Project tracker CLI", version)]
pub struct Cli {
    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:5001")]
    pub server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}
