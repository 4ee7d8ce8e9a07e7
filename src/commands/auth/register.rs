use crate::api::ApiClient;
use crate::api::models::{ClientLogin, NewClientAccount};
use crate::cli::commands::auth::RegisterArgs;
use crate::ui::{prompt_new_password, text_or_prompt, with_spinner};
use crate::validation::{validate_email, validate_phone, validate_required};
use anyhow::Result;
use colored::*;
use log::info;

/// Create a client account, prompting for whatever was not passed as a flag
pub async fn register_command(client: &ApiClient, args: RegisterArgs) -> Result<()> {
    info!("Executing auth register command");

    let organisation = text_or_prompt(args.organisation, "Organisation", None)?;
    let last_name = text_or_prompt(args.last_name, "Last name", None)?;
    let first_name = text_or_prompt(args.first_name, "First name", None)?;
    let phone = text_or_prompt(args.phone, "Phone", None)?;
    let email = text_or_prompt(args.email, "Contact email", None)?;
    let username = text_or_prompt(args.username, "Username", None)?;
    let login_email = text_or_prompt(args.login_email, "Login email", Some(&email))?;
    let password = prompt_new_password()?;

    let account = NewClientAccount {
        nom_structure: organisation.trim().to_string(),
        nom: last_name.trim().to_string(),
        prenom: first_name.trim().to_string(),
        email: email.trim().to_string(),
        telephone: phone.trim().to_string(),
        user: ClientLogin {
            username: username.trim().to_string(),
            email: login_email.trim().to_string(),
            password,
        },
    };
    validate_account(&account)?;

    with_spinner("Creating account", client.register_client(&account)).await?;

    println!(
        "{} Account '{}' created. Run 'avis-cli auth login' to log in",
        "✓".bright_green().bold(),
        account.user.username.bright_green().bold()
    );
    Ok(())
}

pub fn validate_account(account: &NewClientAccount) -> Result<()> {
    validate_required("Organisation", &account.nom_structure)?;
    validate_required("Last name", &account.nom)?;
    validate_required("First name", &account.prenom)?;
    validate_phone(&account.telephone)?;
    validate_email(&account.email)?;
    validate_required("Username", &account.user.username)?;
    validate_email(&account.user.email)?;
    validate_required("Password", &account.user.password)?;
    Ok(())
}
