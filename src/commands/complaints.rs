use super::contact::resolve_contact;
use crate::api::constants::COMPLAINTS_FULL_ENDPOINT;
use crate::api::models::{Complaint, ComplaintStatus, NewComplaint};
use crate::api::{ApiClient, Paginator};
use crate::cli::commands::ContactArgs;
use crate::cli::commands::complaints::{ComplaintsCommands, ComplaintsSubcommands};
use crate::ui::{
    prompt_delete_confirmation, render_complaints_table, render_page_footer, text_or_prompt,
    with_spinner,
};
use crate::validation::validate_required;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use serde_json::Value;

pub async fn handle_complaints_command(cmd: ComplaintsCommands, client: &ApiClient) -> Result<()> {
    match cmd.command {
        ComplaintsSubcommands::List { page, all, mine } => {
            if mine {
                list_mine_command(client).await
            } else {
                list_command(client, page, all).await
            }
        }
        ComplaintsSubcommands::Submit {
            subject,
            description,
            category,
            contact,
        } => submit_command(client, subject, description, category, contact).await,
        ComplaintsSubcommands::Status { id, status } => status_command(client, id, &status).await,
        ComplaintsSubcommands::Delete { id, force } => delete_command(client, id, force).await,
    }
}

fn print_complaints(records: &[Complaint]) {
    print!("{}", render_complaints_table(records));
}

async fn list_command(client: &ApiClient, page: Option<String>, all: bool) -> Result<()> {
    info!("Listing complaints (page: {:?}, all: {})", page, all);
    client.session().await.role.require_staff()?;

    if all {
        let records = with_spinner("Fetching all complaints", client.all_complaints()).await?;
        if records.is_empty() {
            println!("No complaints found.");
            return Ok(());
        }
        print_complaints(&records);
        println!("\nTotal: {}", records.len());
        return Ok(());
    }

    let mut paginator: Paginator<Complaint> =
        Paginator::new(page.unwrap_or_else(|| COMPLAINTS_FULL_ENDPOINT.to_string()));
    with_spinner("Fetching complaints", paginator.load(client)).await;

    if paginator.records().is_empty() {
        println!("No complaints found.");
        return Ok(());
    }

    print_complaints(paginator.records());
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
    info!("Listing the logged-in client's complaints");
    let session = client.session().await;
    session.role.require_client()?;

    let client_id = session
        .client_id()
        .context("No client profile in the session. Run 'avis-cli auth login' again")?;

    let records = with_spinner("Fetching your complaints", client.client_complaints(client_id)).await?;
    if records.is_empty() {
        println!("You have not filed any complaints.");
        return Ok(());
    }

    print_complaints(&records);
    println!("\nTotal: {}", records.len());
    Ok(())
}

fn tracking_number(response: &Value) -> Option<&str> {
    response.get("numero_suivi").and_then(Value::as_str)
}

async fn submit_command(
    client: &ApiClient,
    subject: Option<String>,
    description: Option<String>,
    category: u64,
    contact: ContactArgs,
) -> Result<()> {
    info!("Submitting complaint in category {}", category);

    let sujet = text_or_prompt(subject, "Subject", None)?;
    validate_required("Subject", &sujet)?;
    let description = text_or_prompt(description, "Description", None)?;
    validate_required("Description", &description)?;

    let session = client.session().await;
    let contact = resolve_contact(contact, session.client.as_ref())?;

    let payload = NewComplaint {
        sujet,
        description,
        categorie: category,
        nom_structure: contact.nom_structure,
        nom: contact.nom,
        prenom: contact.prenom,
        email: contact.email,
        telephone: contact.telephone,
        booking_number: contact.booking_number,
        client: session.client_id(),
    };

    let response = with_spinner("Submitting complaint", client.submit_complaint(&payload)).await?;

    match tracking_number(&response) {
        Some(number) => println!(
            "{} Complaint submitted. Tracking number: {}",
            "✓".bright_green().bold(),
            number.bright_green().bold()
        ),
        None => println!("{} Complaint submitted", "✓".bright_green().bold()),
    }
    Ok(())
}

async fn status_command(client: &ApiClient, id: u64, status: &str) -> Result<()> {
    info!("Changing status of complaint {} to {}", id, status);
    client.session().await.role.require_staff()?;

    let status: ComplaintStatus = status.parse()?;
    client.update_complaint_status(id, status).await?;

    println!(
        "{} Complaint #{} is now {}",
        "✓".bright_green().bold(),
        id,
        status.label().bright_green().bold()
    );
    Ok(())
}

async fn delete_command(client: &ApiClient, id: u64, force: bool) -> Result<()> {
    info!("Deleting complaint {}", id);
    client.session().await.role.require_staff()?;

    if !force && !prompt_delete_confirmation("complaint", id)? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_complaint(id).await?;
    println!("{} Complaint #{} deleted", "✓".bright_green().bold(), id);
    Ok(())
}
