use crate::api::ApiClient;
use crate::api::models::{ClientProfile, ProfileUpdate};
use crate::cli::commands::profile::{ProfileCommands, ProfileSubcommands};
use crate::ui::{render_complaints_table, render_feedback_table, with_spinner};
use crate::validation::{validate_email, validate_phone, validate_required};
use anyhow::Result;
use colored::*;
use log::info;

/// Client profile commands. Staff accounts have no client profile.
pub async fn handle_profile_command(cmd: ProfileCommands, client: &ApiClient) -> Result<()> {
    client.session().await.role.require_client()?;

    match cmd.command {
        ProfileSubcommands::Show => show_command(client).await,
        ProfileSubcommands::History => history_command(client).await,
        ProfileSubcommands::Update {
            last_name,
            first_name,
            email,
            phone,
            organisation,
        } => {
            let update = ProfileUpdate {
                nom: last_name,
                prenom: first_name,
                email,
                telephone: phone,
                nom_structure: organisation,
            };
            update_command(client, update).await
        }
    }
}

fn print_profile(profile: &ClientProfile) {
    println!("Client #{}", profile.id);
    println!("  Last name:    {}", profile.nom);
    println!("  First name:   {}", profile.prenom);
    println!("  Organisation: {}", profile.nom_structure);
    println!("  Email:        {}", profile.email);
    println!("  Phone:        {}", profile.telephone);
}

/// Keep the profile stored in the session in step with the server
async fn store_profile(client: &ApiClient, profile: ClientProfile) -> Result<()> {
    let mut session = client.session().await;
    session.client = Some(profile);
    client.replace_session(session).await;
    client.persist_session().await
}

async fn show_command(client: &ApiClient) -> Result<()> {
    info!("Showing client profile");

    let profile = with_spinner("Fetching profile", client.client_profile()).await?;
    print_profile(&profile);
    store_profile(client, profile).await
}

async fn history_command(client: &ApiClient) -> Result<()> {
    info!("Showing client history");

    let history = with_spinner("Fetching history", client.client_history()).await?;
    print_profile(&history.client);

    println!("\nComplaints ({})", history.reclamations.len());
    if history.reclamations.is_empty() {
        println!("  none");
    } else {
        print!("{}", render_complaints_table(&history.reclamations));
    }

    println!("\nFeedback ({})", history.avis.len());
    if history.avis.is_empty() {
        println!("  none");
    } else {
        print!("{}", render_feedback_table(&history.avis));
    }

    store_profile(client, history.client).await
}

pub fn validate_update(update: &ProfileUpdate) -> Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one field to change");
    }
    if let Some(nom) = &update.nom {
        validate_required("Last name", nom)?;
    }
    if let Some(prenom) = &update.prenom {
        validate_required("First name", prenom)?;
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    if let Some(telephone) = &update.telephone {
        validate_phone(telephone)?;
    }
    Ok(())
}

async fn update_command(client: &ApiClient, update: ProfileUpdate) -> Result<()> {
    info!("Updating client profile");
    validate_update(&update)?;

    let profile = with_spinner("Updating profile", client.update_profile(&update)).await?;
    println!("{} Profile updated", "✓".bright_green().bold());
    print_profile(&profile);
    store_profile(client, profile).await
}
