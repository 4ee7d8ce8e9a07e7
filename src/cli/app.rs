use super::commands::auth::AuthCommands;
use super::commands::complaints::ComplaintsCommands;
use super::commands::export::ExportCommands;
use super::commands::feedback::FeedbackCommands;
use super::commands::profile::ProfileCommands;
use super::commands::reference::ReferenceCommands;
use super::commands::settings::SettingsCommands;
use super::commands::stats::StatsArgs;
use super::commands::users::UsersCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "avis-cli")]
#[command(about = "A CLI for the customer feedback and complaint service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in, log out and show the current session
    Auth(AuthCommands),
    /// Browse, submit and delete feedback
    Feedback(FeedbackCommands),
    /// Browse, submit and process complaints
    Complaints(ComplaintsCommands),
    /// Manage the services feedback can be about
    Services(ReferenceCommands),
    /// Manage the categories complaints are filed under
    Categories(ReferenceCommands),
    /// Manage staff accounts (superuser only)
    Users(UsersCommands),
    /// Show or edit the logged-in client's profile
    Profile(ProfileCommands),
    /// Dashboard statistics over all feedback and complaints (staff only)
    Stats(StatsArgs),
    /// Export feedback or complaints to CSV (staff only)
    Export(ExportCommands),
    /// Application settings management
    Settings(SettingsCommands),
}
