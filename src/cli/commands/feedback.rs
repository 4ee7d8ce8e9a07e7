use super::ContactArgs;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct FeedbackCommands {
    #[command(subcommand)]
    pub command: FeedbackSubcommands,
}

#[derive(Subcommand)]
pub enum FeedbackSubcommands {
    /// List feedback one page at a time (staff only)
    List {
        /// Page URL to show, as printed under a previous listing
        #[arg(long)]
        page: Option<String>,
        /// Fetch every page instead of one
        #[arg(long, conflicts_with = "page")]
        all: bool,
        /// Only the feedback you submitted (client accounts)
        #[arg(long, conflicts_with_all = ["page", "all"])]
        mine: bool,
    },
    /// Submit a rating for a service
    Submit {
        /// Rating from 1 to 5
        #[arg(short, long)]
        note: u8,
        /// Service ID the rating is about
        #[arg(short, long)]
        service: u64,
        /// Free-text comment
        #[arg(short, long)]
        comment: Option<String>,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Delete a feedback record (staff only)
    Delete {
        /// Feedback ID
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
