use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "muse")]
#[command(about = "MoodMuse from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config.toml and MOODMUSE_API_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
