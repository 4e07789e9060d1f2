use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        username: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        username: String,
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// Analyze a mood description
    Analyze {
        text: String,
        #[arg(long)]
        emoji: Option<String>,
    },

    /// Ask a question about past entries
    Ask { question: String },

    /// Mood history
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },

    /// Profile settings
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List one page of entries
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Delete an entry
    Delete {
        id: i64,
        /// Page the entry is on
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Change username and/or bio
    Update {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },

    /// Upload a new profile image
    UploadImage { path: PathBuf },
}
