//! Wire models for the feedback and complaint API

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service a feedback record is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub id: u64,
    pub nom: String,
    #[serde(default)]
    pub description: String,
}

/// Category a complaint is filed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub nom: String,
    #[serde(default)]
    pub description: String,
}

/// Client-submitted rating ("avis")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: u64,
    #[serde(default)]
    pub client: Option<u64>,
    pub note: u8,
    #[serde(default)]
    pub commentaire: Option<String>,
    #[serde(default)]
    pub service_concerne_detail: Option<ServiceRef>,
    #[serde(default)]
    pub nom_structure: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub booking_number: Option<String>,
    #[serde(default)]
    pub date_submitted: String,
}

impl Feedback {
    pub fn submitted_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date_submitted)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_concerne_detail.as_ref().map(|s| s.nom.as_str())
    }
}

/// Complaint status as stored by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl ComplaintStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "inProgress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "En attente",
            ComplaintStatus::InProgress => "En cours",
            ComplaintStatus::Resolved => "Résolue",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for ComplaintStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "pending" => Ok(ComplaintStatus::Pending),
            "inprogress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            _ => anyhow::bail!(
                "Unknown complaint status '{}' (expected pending, in-progress or resolved)",
                s
            ),
        }
    }
}

/// Client-submitted complaint ("réclamation")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: u64,
    #[serde(default)]
    pub client: Option<u64>,
    #[serde(default)]
    pub sujet: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categorie_detail: Option<Category>,
    #[serde(default)]
    pub nom_structure: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub booking_number: Option<String>,
    #[serde(default)]
    pub numero_suivi: String,
    pub statut: ComplaintStatus,
    #[serde(default)]
    pub date_submitted: String,
    #[serde(default)]
    pub date_resolue: Option<String>,
}

impl Complaint {
    pub fn submitted_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date_submitted)
    }

    pub fn resolved_at(&self) -> Option<NaiveDateTime> {
        self.date_resolue.as_deref().and_then(parse_timestamp)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.categorie_detail.as_ref().map(|c| c.nom.as_str())
    }

    /// Whole days between submission and resolution, when both are known
    /// and the complaint is marked resolved
    pub fn resolution_days(&self) -> Option<i64> {
        if self.statut != ComplaintStatus::Resolved {
            return None;
        }
        let submitted = self.submitted_at()?;
        let resolved = self.resolved_at()?;
        Some((resolved - submitted).num_days())
    }
}

/// Feedback submission payload
#[derive(Debug, Clone, Serialize)]
pub struct NewFeedback {
    pub note: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    pub service_concerne: u64,
    pub nom_structure: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<u64>,
}

/// Complaint submission payload
#[derive(Debug, Clone, Serialize)]
pub struct NewComplaint {
    pub sujet: String,
    pub description: String,
    pub categorie: u64,
    pub nom_structure: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<u64>,
}

/// Payload for creating or replacing a service or a category
#[derive(Debug, Clone, Serialize)]
pub struct ReferencePayload {
    pub nom: String,
    pub description: String,
}

/// Profile of the client attached to the logged-in account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: u64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub nom_structure: String,
}

/// Editable client profile fields
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_structure: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.nom.is_none()
            && self.prenom.is_none()
            && self.email.is_none()
            && self.telephone.is_none()
            && self.nom_structure.is_none()
    }
}

/// Staff account as listed by the user management endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
}

/// What the profile update endpoint answers: a status flag and the stored
/// fields, without the client id
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    pub status: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub nom_structure: String,
}

impl ProfileUpdateResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Copy the stored fields onto a profile, keeping its id
    pub fn apply_to(self, profile: &mut ClientProfile) {
        profile.nom = self.nom;
        profile.prenom = self.prenom;
        profile.email = self.email;
        profile.telephone = self.telephone;
        profile.nom_structure = self.nom_structure;
    }
}

/// A client's profile together with everything they submitted
#[derive(Debug, Clone, Deserialize)]
pub struct ClientHistory {
    pub client: ClientProfile,
    #[serde(default)]
    pub reclamations: Vec<Complaint>,
    #[serde(default)]
    pub avis: Vec<Feedback>,
}

/// Staff account registration payload
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_superuser: bool,
}

/// Login credentials nested in a client registration
#[derive(Debug, Clone, Serialize)]
pub struct ClientLogin {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Client self-registration payload
#[derive(Debug, Clone, Serialize)]
pub struct NewClientAccount {
    pub nom_structure: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub user: ClientLogin,
}

/// Tokens returned by the login endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Parse the timestamp formats the server emits.
///
/// Accepts RFC 3339 (`2024-01-01T10:00:00Z`, offsets are normalised to UTC),
/// naive date-times with optional fractional seconds, and bare dates
/// (midnight). Anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
