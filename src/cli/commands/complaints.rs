use super::ContactArgs;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ComplaintsCommands {
    #[command(subcommand)]
    pub command: ComplaintsSubcommands,
}

#[derive(Subcommand)]
pub enum ComplaintsSubcommands {
    /// List complaints one page at a time
    List {
        /// Page URL to show, as printed under a previous listing
        #[arg(long)]
        page: Option<String>,
        /// Fetch every page instead of one
        #[arg(long, conflicts_with = "page")]
        all: bool,
        /// Only complaints filed by the logged-in client
        #[arg(long, conflicts_with_all = ["page", "all"])]
        mine: bool,
    },
    /// File a complaint
    Submit {
        /// Short subject line
        #[arg(long)]
        subject: Option<String>,
        /// Full description
        #[arg(short, long)]
        description: Option<String>,
        /// Category ID
        #[arg(short, long)]
        category: u64,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Change a complaint's status (staff only)
    Status {
        /// Complaint ID
        id: u64,
        /// New status: pending, in-progress or resolved
        status: String,
    },
    /// Delete a complaint (staff only)
    Delete {
        /// Complaint ID
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
