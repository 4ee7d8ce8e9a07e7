use clap::{Args, Subcommand};

#[derive(Args)]
pub struct UsersCommands {
    #[command(subcommand)]
    pub command: UsersSubcommands,
}

#[derive(Subcommand)]
pub enum UsersSubcommands {
    /// List staff accounts
    List,
    /// Register a new staff account
    Add {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
        /// Give the account superuser rights
        #[arg(long)]
        admin: bool,
    },
    /// Delete a staff account
    Delete {
        /// User ID
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Set a new password for a staff account
    Password {
        /// User ID
        id: u64,
    },
}
