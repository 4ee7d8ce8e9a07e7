use crate::api::{ApiClient, decode_claims};
use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::*;
use log::{info, warn};

pub async fn status_command(client: &ApiClient) -> Result<()> {
    info!("Executing auth status command");

    let session = client.session().await;

    println!("Avis CLI Authentication Status");
    println!("==============================");
    println!("Server: {}", client.base_url());

    if !session.is_authenticated() {
        println!("{}", "Not logged in.".bright_yellow());
        println!("Run 'avis-cli auth login' to log in.");
        return Ok(());
    }

    println!("Username: {}", session.username.as_deref().unwrap_or("?"));
    println!("Role: {}", session.role.label());

    if let Some(token) = &session.access_token {
        match decode_claims(token) {
            Ok(claims) => {
                if let Some(expires) = claims.exp.and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0)) {
                    println!("Access token expires: {}", expires.format("%Y-%m-%d %H:%M:%S UTC"));
                }
            }
            Err(e) => warn!("Stored access token is unreadable: {}", e),
        }
    }

    if let Some(profile) = &session.client {
        println!("\nClient #{}", profile.id);
        println!("  {} {}", profile.prenom, profile.nom);
        println!("  {}", profile.nom_structure);
        println!("  {} / {}", profile.email, profile.telephone);
    }

    Ok(())
}
