use anyhow::Result;
use avis_cli::api::ApiClient;
use avis_cli::cli::commands::auth::AuthSubcommands;
use avis_cli::cli::commands::settings::SettingsSubcommands;
use avis_cli::cli::{Cli, Commands};
use avis_cli::commands::auth::{login_command, logout_command, register_command, status_command};
use avis_cli::commands::complaints::handle_complaints_command;
use avis_cli::commands::export::handle_export_command;
use avis_cli::commands::feedback::handle_feedback_command;
use avis_cli::commands::profile::handle_profile_command;
use avis_cli::commands::reference::{ReferenceKind, handle_reference_command};
use avis_cli::commands::settings::{reset_command, set_command, show_command};
use avis_cli::commands::stats::stats_command;
use avis_cli::commands::users::handle_users_command;
use avis_cli::config::Config;
use avis_cli::session::Session;
use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("avis-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting avis-cli");

    let config = Config::load()?;
    let session_path = Session::get_session_path()?;
    let session = Session::load_from(&session_path).unwrap_or_else(|e| {
        warn!("Ignoring unreadable session file: {:#}", e);
        Session::anonymous()
    });
    let client = ApiClient::new(&config, session)?.with_session_path(session_path);

    match cli.command {
        Commands::Auth(auth) => match auth.command {
            AuthSubcommands::Login { username, password } => {
                login_command(&client, username, password).await?
            }
            AuthSubcommands::Register(args) => register_command(&client, args).await?,
            AuthSubcommands::Logout => logout_command(&client).await?,
            AuthSubcommands::Status => status_command(&client).await?,
        },
        Commands::Feedback(cmd) => handle_feedback_command(cmd, &client).await?,
        Commands::Complaints(cmd) => handle_complaints_command(cmd, &client).await?,
        Commands::Services(cmd) => {
            handle_reference_command(cmd, ReferenceKind::Service, &client).await?
        }
        Commands::Categories(cmd) => {
            handle_reference_command(cmd, ReferenceKind::Category, &client).await?
        }
        Commands::Users(cmd) => handle_users_command(cmd, &client).await?,
        Commands::Profile(cmd) => handle_profile_command(cmd, &client).await?,
        Commands::Stats(args) => stats_command(args, &client).await?,
        Commands::Export(cmd) => handle_export_command(cmd, &config, &client).await?,
        Commands::Settings(settings) => match settings.command {
            SettingsSubcommands::Show => show_command().await?,
            SettingsSubcommands::Set { name, value } => set_command(name, value).await?,
            SettingsSubcommands::Reset { force } => reset_command(force).await?,
        },
    }

    Ok(())
}
