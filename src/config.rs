use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured API base URL
pub const BASE_URL_ENV: &str = "AVIS_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            export_dir: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("avis-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".avis-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Load the config file, then apply `.env` / environment overrides
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::load_from(&Self::get_config_path()?)?;
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.apply_base_url_override(&base_url);
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!("Loaded config for {}", config.base_url);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    fn apply_base_url_override(&mut self, base_url: &str) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            debug!("Base URL overridden from {}", BASE_URL_ENV);
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
    }

    /// Set a setting by key, as used by `settings set`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    anyhow::bail!("base_url must start with http:// or https://");
                }
                self.base_url = value.trim_end_matches('/').to_string();
            }
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid timeout '{}'", value))?;
                if secs == 0 {
                    anyhow::bail!("timeout_secs must be greater than zero");
                }
                self.settings.timeout_secs = secs;
            }
            "export_dir" => {
                self.settings.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => anyhow::bail!(
                "Unknown setting '{}' (expected base_url, timeout_secs or export_dir)",
                other
            ),
        }
        info!("Updated setting {}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.settings.timeout_secs, 30);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"https://avis.example.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://avis.example.com");
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("timeout_secs", "5").unwrap();
        config.set_value("export_dir", "/tmp/exports").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.settings.timeout_secs, 5);
        assert_eq!(reloaded.settings.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_set_value_validation() {
        let mut config = Config::default();

        assert!(config.set_value("base_url", "ftp://nope").is_err());
        assert!(config.set_value("timeout_secs", "0").is_err());
        assert!(config.set_value("timeout_secs", "abc").is_err());
        assert!(config.set_value("colour", "blue").is_err());

        config.set_value("base_url", "https://avis.example.com/").unwrap();
        assert_eq!(config.base_url, "https://avis.example.com");
    }

    #[test]
    fn test_base_url_override() {
        let mut config = Config::default();
        config.apply_base_url_override("  ");
        assert_eq!(config.base_url, "http://localhost:8000");

        config.apply_base_url_override("https://staging.example.com/");
        assert_eq!(config.base_url, "https://staging.example.com");
    }
}
