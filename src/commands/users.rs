use crate::api::ApiClient;
use crate::api::models::NewUser;
use crate::cli::commands::users::{UsersCommands, UsersSubcommands};
use crate::ui::{prompt_delete_confirmation, prompt_new_password, render_users_table, text_or_prompt, with_spinner};
use crate::validation::{validate_email, validate_required};
use anyhow::Result;
use colored::*;
use log::info;

/// Staff account management. Every subcommand is superuser-only.
pub async fn handle_users_command(cmd: UsersCommands, client: &ApiClient) -> Result<()> {
    client.session().await.role.require_superuser()?;

    match cmd.command {
        UsersSubcommands::List => list_command(client).await,
        UsersSubcommands::Add { username, email, admin } => {
            add_command(client, username, email, admin).await
        }
        UsersSubcommands::Delete { id, force } => delete_command(client, id, force).await,
        UsersSubcommands::Password { id } => password_command(client, id).await,
    }
}

async fn list_command(client: &ApiClient) -> Result<()> {
    info!("Listing staff accounts");

    let users = with_spinner("Fetching users", client.list_users()).await?;
    if users.is_empty() {
        println!("No staff accounts.");
        return Ok(());
    }

    print!("{}", render_users_table(&users));
    println!("\nTotal users: {}", users.len());
    Ok(())
}

async fn add_command(
    client: &ApiClient,
    username: Option<String>,
    email: Option<String>,
    admin: bool,
) -> Result<()> {
    info!("Registering a staff account (superuser: {})", admin);

    let username = text_or_prompt(username, "Username", None)?;
    validate_required("Username", &username)?;
    let email = text_or_prompt(email, "Email", None)?;
    validate_email(&email)?;
    let password = prompt_new_password()?;
    validate_required("Password", &password)?;

    let user = NewUser {
        username,
        email,
        password,
        is_superuser: admin,
    };
    client.register_user(&user).await?;

    let kind = if user.is_superuser { "Superuser" } else { "Staff" };
    println!(
        "{} {} account '{}' created",
        "✓".bright_green().bold(),
        kind,
        user.username.bright_green().bold()
    );
    Ok(())
}

async fn delete_command(client: &ApiClient, id: u64, force: bool) -> Result<()> {
    info!("Deleting staff account {}", id);

    if !force && !prompt_delete_confirmation("user", id)? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_user(id).await?;
    println!("{} User #{} deleted", "✓".bright_green().bold(), id);
    Ok(())
}

async fn password_command(client: &ApiClient, id: u64) -> Result<()> {
    info!("Changing password of staff account {}", id);

    let password = prompt_new_password()?;
    validate_required("Password", &password)?;

    client.change_password(id, &password).await?;
    println!("{} Password changed for user #{}", "✓".bright_green().bold(), id);
    Ok(())
}
