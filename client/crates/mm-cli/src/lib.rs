pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod navigator;
pub mod output;
pub mod runner;


pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use navigator::TerminalNavigator;
