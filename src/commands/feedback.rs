use super::contact::resolve_contact;
use crate::api::constants::FEEDBACK_FULL_ENDPOINT;
use crate::api::models::{Feedback, NewFeedback};
use crate::api::{ApiClient, Paginator};
use crate::cli::commands::ContactArgs;
use crate::cli::commands::feedback::{FeedbackCommands, FeedbackSubcommands};
use crate::ui::{prompt_delete_confirmation, render_feedback_table, render_page_footer, with_spinner};
use crate::validation::validate_rating;
use anyhow::Result;
use colored::*;
use log::info;

pub async fn handle_feedback_command(cmd: FeedbackCommands, client: &ApiClient) -> Result<()> {
    match cmd.command {
        FeedbackSubcommands::List { page, all, mine } => {
            if mine {
                list_mine_command(client).await
            } else {
                list_command(client, page, all).await
            }
        }
        FeedbackSubcommands::Submit {
            note,
            service,
            comment,
            contact,
        } => submit_command(client, note, service, comment, contact).await,
        FeedbackSubcommands::Delete { id, force } => delete_command(client, id, force).await,
    }
}

async fn list_command(client: &ApiClient, page: Option<String>, all: bool) -> Result<()> {
    info!("Listing feedback (page: {:?}, all: {})", page, all);
    client.session().await.role.require_staff()?;

    if all {
        let records = with_spinner("Fetching all feedback", client.all_feedback()).await?;
        if records.is_empty() {
            println!("No feedback found.");
            return Ok(());
        }
        print!("{}", render_feedback_table(&records));
        println!("\nTotal: {}", records.len());
        return Ok(());
    }

    let mut paginator: Paginator<Feedback> =
        Paginator::new(page.unwrap_or_else(|| FEEDBACK_FULL_ENDPOINT.to_string()));
    with_spinner("Fetching feedback", paginator.load(client)).await;

    if paginator.records().is_empty() {
        println!("No feedback found.");
        return Ok(());
    }

    print!("{}", render_feedback_table(paginator.records()));
    println!(
        "\n{}",
        render_page_footer(
            paginator.records().len(),
            paginator.count(),
            paginator.next(),
            paginator.previous()
        )
    );
    Ok(())
}

async fn list_mine_command(client: &ApiClient) -> Result<()> {
    info!("Listing the logged-in client's feedback");
    client.session().await.role.require_client()?;

    let history = with_spinner("Fetching your feedback", client.client_history()).await?;
    if history.avis.is_empty() {
        println!("You have not submitted any feedback.");
        return Ok(());
    }

    print!("{}", render_feedback_table(&history.avis));
    println!("\nTotal: {}", history.avis.len());
    Ok(())
}

async fn submit_command(
    client: &ApiClient,
    note: u8,
    service: u64,
    comment: Option<String>,
    contact: ContactArgs,
) -> Result<()> {
    info!("Submitting feedback for service {}", service);
    validate_rating(note)?;

    let session = client.session().await;
    let contact = resolve_contact(contact, session.client.as_ref())?;

    let payload = NewFeedback {
        note,
        commentaire: comment.filter(|c| !c.trim().is_empty()),
        service_concerne: service,
        nom_structure: contact.nom_structure,
        nom: contact.nom,
        prenom: contact.prenom,
        email: contact.email,
        telephone: contact.telephone,
        booking_number: contact.booking_number,
        client: session.client_id(),
    };

    with_spinner("Submitting feedback", client.submit_feedback(&payload)).await?;
    println!("{} Feedback submitted, thank you", "✓".bright_green().bold());
    Ok(())
}

async fn delete_command(client: &ApiClient, id: u64, force: bool) -> Result<()> {
    info!("Deleting feedback {}", id);
    client.session().await.role.require_staff()?;

    if !force && !prompt_delete_confirmation("feedback", id)? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_feedback(id).await?;
    println!("{} Feedback #{} deleted", "✓".bright_green().bold(), id);
    Ok(())
}
