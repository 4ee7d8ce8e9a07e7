use crate::config::Config;
use anyhow::Result;
use colored::*;
use log::info;

/// Set the value of a specific setting
///
/// # Arguments
/// * `name` - Setting name
/// * `value` - Setting value
///
/// # Returns
/// * `Ok(())` - Setting updated successfully
/// * `Err(anyhow::Error)` - Configuration error or invalid setting/value
pub async fn set_command(name: String, value: String) -> Result<()> {
    info!("Setting {} to {}", name, value);

    // The file as written, without environment overrides
    let path = Config::get_config_path()?;
    let mut config = Config::load_from(&path)?;

    config.set_value(&name, &value)?;
    config.save_to(&path)?;

    println!("{} Set {} to {}", "✓".bright_green().bold(), name, value);
    Ok(())
}
