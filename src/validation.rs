//! Input checks applied before anything is sent to the server

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("valid phone regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional leading `+`, then 8 to 15 digits. Spaces are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

pub fn validate_email(email: &str) -> Result<()> {
    if !is_valid_email(email) {
        anyhow::bail!("Invalid email address: '{}'", email);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    if !is_valid_phone(phone) {
        anyhow::bail!("Invalid phone number: '{}' (expected 8 to 15 digits)", phone);
    }
    Ok(())
}

pub fn validate_rating(note: u8) -> Result<()> {
    if !(1..=5).contains(&note) {
        anyhow::bail!("Rating must be between 1 and 5, got {}", note);
    }
    Ok(())
}

pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", field);
    }
    Ok(())
}
