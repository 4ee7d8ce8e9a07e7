//! Services and categories: two reference lists with the same shape

use crate::api::ApiClient;
use crate::api::models::{Category, ReferencePayload, ServiceRef};
use crate::cli::commands::reference::{ReferenceCommands, ReferenceSubcommands};
use crate::ui::{prompt_delete_confirmation, render_reference_table, with_spinner};
use crate::validation::validate_required;
use anyhow::Result;
use colored::*;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Service,
    Category,
}

impl ReferenceKind {
    pub fn singular(&self) -> &'static str {
        match self {
            ReferenceKind::Service => "service",
            ReferenceKind::Category => "category",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ReferenceKind::Service => "services",
            ReferenceKind::Category => "categories",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    pub id: u64,
    pub nom: String,
    pub description: String,
}

impl From<ServiceRef> for ReferenceEntry {
    fn from(s: ServiceRef) -> Self {
        Self {
            id: s.id,
            nom: s.nom,
            description: s.description,
        }
    }
}

impl From<Category> for ReferenceEntry {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            nom: c.nom,
            description: c.description,
        }
    }
}

/// Keep existing values for fields the user did not pass
pub fn merge_update(
    existing: &ReferenceEntry,
    name: Option<String>,
    description: Option<String>,
) -> ReferencePayload {
    ReferencePayload {
        nom: name.unwrap_or_else(|| existing.nom.clone()),
        description: description.unwrap_or_else(|| existing.description.clone()),
    }
}

async fn list_entries(client: &ApiClient, kind: ReferenceKind) -> Result<Vec<ReferenceEntry>> {
    Ok(match kind {
        ReferenceKind::Service => client.list_services().await?.into_iter().map(Into::into).collect(),
        ReferenceKind::Category => client.list_categories().await?.into_iter().map(Into::into).collect(),
    })
}

async fn create_entry(client: &ApiClient, kind: ReferenceKind, payload: &ReferencePayload) -> Result<ReferenceEntry> {
    Ok(match kind {
        ReferenceKind::Service => client.create_service(payload).await?.into(),
        ReferenceKind::Category => client.create_category(payload).await?.into(),
    })
}

async fn update_entry(client: &ApiClient, kind: ReferenceKind, id: u64, payload: &ReferencePayload) -> Result<()> {
    match kind {
        ReferenceKind::Service => client.update_service(id, payload).await.map(|_| ()),
        ReferenceKind::Category => client.update_category(id, payload).await.map(|_| ()),
    }
}

async fn delete_entry(client: &ApiClient, kind: ReferenceKind, id: u64) -> Result<()> {
    match kind {
        ReferenceKind::Service => client.delete_service(id).await,
        ReferenceKind::Category => client.delete_category(id).await,
    }
}

pub async fn handle_reference_command(
    cmd: ReferenceCommands,
    kind: ReferenceKind,
    client: &ApiClient,
) -> Result<()> {
    match cmd.command {
        ReferenceSubcommands::List => list_command(client, kind).await,
        ReferenceSubcommands::Add { name, description } => add_command(client, kind, name, description).await,
        ReferenceSubcommands::Update { id, name, description } => {
            update_command(client, kind, id, name, description).await
        }
        ReferenceSubcommands::Delete { id, force } => delete_command(client, kind, id, force).await,
    }
}

async fn list_command(client: &ApiClient, kind: ReferenceKind) -> Result<()> {
    info!("Listing {}", kind.plural());

    let entries = with_spinner(format!("Fetching {}", kind.plural()), list_entries(client, kind)).await?;
    if entries.is_empty() {
        println!("No {} configured.", kind.plural());
        return Ok(());
    }

    print!(
        "{}",
        render_reference_table(entries.iter().map(|e| (e.id, e.nom.as_str(), e.description.as_str())))
    );
    println!("\nTotal {}: {}", kind.plural(), entries.len());
    Ok(())
}

async fn add_command(client: &ApiClient, kind: ReferenceKind, name: String, description: String) -> Result<()> {
    info!("Adding {} '{}'", kind.singular(), name);
    client.session().await.role.require_staff()?;
    validate_required("Name", &name)?;

    let created = create_entry(client, kind, &ReferencePayload { nom: name, description }).await?;
    println!(
        "{} Added {} '{}' (ID {})",
        "✓".bright_green().bold(),
        kind.singular(),
        created.nom.bright_green().bold(),
        created.id
    );
    Ok(())
}

async fn update_command(
    client: &ApiClient,
    kind: ReferenceKind,
    id: u64,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    info!("Updating {} {}", kind.singular(), id);
    client.session().await.role.require_staff()?;

    if name.is_none() && description.is_none() {
        anyhow::bail!("Nothing to update. Pass --name and/or --description");
    }
    if let Some(name) = &name {
        validate_required("Name", name)?;
    }

    let entries = list_entries(client, kind).await?;
    let existing = entries
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow::anyhow!("No {} with ID {}", kind.singular(), id))?;

    let payload = merge_update(existing, name, description);
    update_entry(client, kind, id, &payload).await?;

    println!("{} Updated {} #{}", "✓".bright_green().bold(), kind.singular(), id);
    Ok(())
}

async fn delete_command(client: &ApiClient, kind: ReferenceKind, id: u64, force: bool) -> Result<()> {
    info!("Deleting {} {}", kind.singular(), id);
    client.session().await.role.require_staff()?;

    if !force && !prompt_delete_confirmation(kind.singular(), id)? {
        println!("Cancelled.");
        return Ok(());
    }

    delete_entry(client, kind, id).await?;
    println!("{} Deleted {} #{}", "✓".bright_green().bold(), kind.singular(), id);
    Ok(())
}
