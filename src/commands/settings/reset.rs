use crate::config::Config;
use crate::ui::prompt_confirmation;
use anyhow::Result;
use colored::*;
use log::info;

/// Reset all settings to default values
pub async fn reset_command(force: bool) -> Result<()> {
    info!("Resetting all settings");

    if !force && !prompt_confirmation("Reset all settings to their defaults?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    Config::default().save()?;
    println!("{} All settings reset to defaults", "✓".bright_green().bold());
    Ok(())
}
