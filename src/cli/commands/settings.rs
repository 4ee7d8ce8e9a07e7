use clap::{Args, Subcommand};

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show current settings
    Show,
    /// Set the value of a specific setting
    Set {
        /// Setting name: base_url, timeout_secs or export_dir
        name: String,
        /// Setting value
        value: String,
    },
    /// Reset all settings to default values
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
