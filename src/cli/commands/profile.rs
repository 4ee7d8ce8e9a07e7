use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ProfileCommands {
    #[command(subcommand)]
    pub command: ProfileSubcommands,
}

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Show the client profile
    Show,
    /// Show the profile with every complaint and feedback filed
    History,
    /// Change profile fields; omitted fields are left as they are
    Update {
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        organisation: Option<String>,
    },
}
