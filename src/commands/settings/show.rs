use crate::config::{BASE_URL_ENV, Config};
use anyhow::Result;
use log::info;

/// Show the effective settings, environment overrides included
pub async fn show_command() -> Result<()> {
    info!("Showing settings");

    let config = Config::load()?;

    println!("Config file: {}", Config::get_config_path()?.display());
    println!("{}", "-".repeat(50));
    println!("{:<14} {}", "base_url", config.base_url);
    println!("{:<14} {}", "timeout_secs", config.settings.timeout_secs);
    match &config.settings.export_dir {
        Some(dir) => println!("{:<14} {}", "export_dir", dir.display()),
        None => println!("{:<14} (current directory)", "export_dir"),
    }

    if std::env::var(BASE_URL_ENV).is_ok() {
        println!("\nbase_url is overridden by {}", BASE_URL_ENV);
    }
    Ok(())
}
