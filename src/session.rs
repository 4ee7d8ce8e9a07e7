//! Logged-in session and role gating
//!
//! The session is loaded once at startup and handed to whatever needs it.
//! It is persisted as `session.json` next to the config file.

use crate::api::models::ClientProfile;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Who the current user is, as far as the API is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Anonymous,
    Client,
    Staff,
    Superuser,
}

impl Role {
    pub fn from_claims(is_admin: bool, is_superuser: bool) -> Self {
        match (is_admin, is_superuser) {
            (_, true) => Role::Superuser,
            (true, false) => Role::Staff,
            (false, false) => Role::Client,
        }
    }

    pub fn is_staff(&self) -> bool {
        match self {
            Role::Staff | Role::Superuser => true,
            Role::Anonymous | Role::Client => false,
        }
    }

    pub fn require_staff(&self) -> Result<()> {
        match self {
            Role::Staff | Role::Superuser => Ok(()),
            Role::Client => anyhow::bail!("This command is reserved to staff accounts"),
            Role::Anonymous => anyhow::bail!("Not logged in. Run 'avis-cli auth login' first"),
        }
    }

    pub fn require_superuser(&self) -> Result<()> {
        match self {
            Role::Superuser => Ok(()),
            Role::Staff | Role::Client => {
                anyhow::bail!("This command is reserved to superuser accounts")
            }
            Role::Anonymous => anyhow::bail!("Not logged in. Run 'avis-cli auth login' first"),
        }
    }

    pub fn require_client(&self) -> Result<()> {
        match self {
            Role::Client => Ok(()),
            Role::Staff | Role::Superuser => {
                anyhow::bail!("This command is only available to client accounts")
            }
            Role::Anonymous => anyhow::bail!("Not logged in. Run 'avis-cli auth login' first"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Anonymous => "anonymous",
            Role::Client => "client",
            Role::Staff => "staff",
            Role::Superuser => "superuser",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub client: Option<ClientProfile>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.role != Role::Anonymous
    }

    pub fn client_id(&self) -> Option<u64> {
        self.client.as_ref().map(|c| c.id)
    }

    /// Forget tokens, role and profile
    pub fn clear(&mut self) {
        *self = Self::anonymous();
    }

    pub fn get_session_path() -> Result<PathBuf> {
        Ok(crate::config::Config::get_config_dir()?.join("session.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_session_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No session file at {:?}, starting anonymous", path);
            return Ok(Self::anonymous());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        let session: Session = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))?;

        debug!("Loaded {} session from {:?}", session.role.label(), path);
        Ok(session)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize session")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;
        debug!("Session saved to {:?}", path);
        Ok(())
    }

    /// Remove the persisted session, if any
    pub fn remove_file(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove session file: {:?}", path))?;
            info!("Removed session file {:?}", path);
        }
        Ok(())
    }
}
