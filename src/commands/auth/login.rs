use crate::api::{ApiClient, AuthClient, session_from_tokens};
use crate::session::Role;
use crate::ui::{prompt_login, with_spinner};
use anyhow::{Context, Result};
use colored::*;
use log::info;

/// Log in with username and password and store the resulting session.
///
/// Client accounts also get their profile attached to the session, so later
/// submissions can fill in contact details and `complaints list --mine` knows
/// which client to ask for.
pub async fn login_command(
    client: &ApiClient,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    info!("Executing auth login command");

    let input = prompt_login(username, password)?;
    let auth = AuthClient::new(client.http_client(), client.base_url());

    let tokens = with_spinner("Logging in", auth.login(&input.username, &input.password)).await?;
    let mut session = session_from_tokens(tokens, &input.username)?;
    client.replace_session(session.clone()).await;

    if session.role == Role::Client {
        let profile = with_spinner("Loading client profile", client.client_profile())
            .await
            .context("Logged in, but the client profile could not be loaded")?;
        session.client = Some(profile);
        client.replace_session(session.clone()).await;
    }

    client.persist_session().await?;
    info!("Logged in as {} with role {}", input.username, session.role.label());

    println!(
        "{} Logged in as {} ({})",
        "✓".bright_green().bold(),
        session.username.as_deref().unwrap_or(&input.username).bright_green().bold(),
        session.role.label()
    );
    Ok(())
}
