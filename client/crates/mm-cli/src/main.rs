//! muse - MoodMuse command-line client
//!
//! # Examples
//!
//! ```bash
//! # Sign in (password read from stdin)
//! echo "$PASSWORD" | muse login joe
//!
//! # Analyze today's mood
//! muse analyze "Slow morning, but the walk by the river helped a lot" --pretty
//!
//! # Second page of history
//! muse history list --page 2
//! ```

use mm_cli::{Cli, CliResult, TerminalNavigator, logger, output, runner};
use mm_client::MoodMuse;
use mm_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let rendered = run(cli)
        .await
        .and_then(|value| output::render(&value, pretty));

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let app = MoodMuse::from_config(config, Arc::new(TerminalNavigator::new()))?;
    let result = runner::execute(&app, cli.command).await;
    app.dispose();
    result
}
