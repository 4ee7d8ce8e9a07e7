use clap::{Args, Subcommand};

/// Shared by `services` and `categories`, which have the same shape
#[derive(Args)]
pub struct ReferenceCommands {
    #[command(subcommand)]
    pub command: ReferenceSubcommands,
}

#[derive(Subcommand)]
pub enum ReferenceSubcommands {
    /// List all entries
    List,
    /// Add an entry (staff only)
    Add {
        /// Display name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Rename or redescribe an entry (staff only)
    Update {
        /// Entry ID
        id: u64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an entry (staff only)
    Delete {
        /// Entry ID
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
