use crate::api::ApiClient;
use anyhow::Result;
use colored::*;
use log::info;

pub async fn logout_command(client: &ApiClient) -> Result<()> {
    info!("Executing auth logout command");

    if !client.session().await.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    client.logout().await?;
    println!("{} Logged out", "✓".bright_green().bold());
    Ok(())
}
