use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ExportCommands {
    #[command(subcommand)]
    pub command: ExportSubcommands,
}

#[derive(Subcommand)]
pub enum ExportSubcommands {
    /// Export every feedback record
    Feedback {
        /// Output file (defaults to the export directory setting)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export every complaint
    Complaints {
        /// Output file (defaults to the export directory setting)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
