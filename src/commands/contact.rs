//! Contact details for submissions, from flags, profile, or prompts

use crate::api::models::ClientProfile;
use crate::cli::commands::ContactArgs;
use crate::ui::text_or_prompt;
use crate::validation::{validate_email, validate_phone, validate_required};
use anyhow::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub nom_structure: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub booking_number: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Fill flags the user left out from the client profile
pub fn merge_with_profile(args: ContactArgs, profile: Option<&ClientProfile>) -> ContactArgs {
    let Some(profile) = profile else {
        return args;
    };

    ContactArgs {
        organisation: args.organisation.or_else(|| non_empty(&profile.nom_structure)),
        last_name: args.last_name.or_else(|| non_empty(&profile.nom)),
        first_name: args.first_name.or_else(|| non_empty(&profile.prenom)),
        email: args.email.or_else(|| non_empty(&profile.email)),
        phone: args.phone.or_else(|| non_empty(&profile.telephone)),
        booking: args.booking,
    }
}

/// Prompt for whatever is still missing, then validate
pub fn resolve_contact(args: ContactArgs, profile: Option<&ClientProfile>) -> Result<ContactDetails> {
    let args = merge_with_profile(args, profile);

    let details = ContactDetails {
        nom_structure: text_or_prompt(args.organisation, "Organisation", None)?,
        nom: text_or_prompt(args.last_name, "Last name", None)?,
        prenom: text_or_prompt(args.first_name, "First name", None)?,
        email: text_or_prompt(args.email, "Email", None)?,
        telephone: text_or_prompt(args.phone, "Phone", None)?,
        booking_number: args.booking.as_deref().and_then(non_empty),
    };

    validate_contact(&details)?;
    Ok(details)
}

pub fn validate_contact(details: &ContactDetails) -> Result<()> {
    validate_required("Organisation", &details.nom_structure)?;
    validate_required("Last name", &details.nom)?;
    validate_required("First name", &details.prenom)?;
    validate_email(&details.email)?;
    validate_phone(&details.telephone)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ClientProfile {
        ClientProfile {
            id: 3,
            nom: "Diallo".to_string(),
            prenom: "Awa".to_string(),
            email: "awa@example.com".to_string(),
            telephone: "+221700000000".to_string(),
            nom_structure: String::new(),
        }
    }

    #[test]
    fn test_flags_win_over_profile() {
        let args = ContactArgs {
            email: Some("other@example.com".to_string()),
            ..Default::default()
        };

        let merged = merge_with_profile(args, Some(&profile()));

        assert_eq!(merged.email.as_deref(), Some("other@example.com"));
        assert_eq!(merged.last_name.as_deref(), Some("Diallo"));
        assert_eq!(merged.phone.as_deref(), Some("+221700000000"));
    }

    #[test]
    fn test_blank_profile_fields_stay_missing() {
        let merged = merge_with_profile(ContactArgs::default(), Some(&profile()));
        assert!(merged.organisation.is_none());
        assert!(merged.booking.is_none());
    }

    #[test]
    fn test_without_profile_args_pass_through() {
        let args = ContactArgs {
            booking: Some("BK-9".to_string()),
            ..Default::default()
        };
        let merged = merge_with_profile(args, None);
        assert_eq!(merged.booking.as_deref(), Some("BK-9"));
        assert!(merged.email.is_none());
    }

    #[test]
    fn test_validate_contact() {
        let mut details = ContactDetails {
            nom_structure: "ACME".to_string(),
            nom: "Diallo".to_string(),
            prenom: "Awa".to_string(),
            email: "awa@example.com".to_string(),
            telephone: "77 123 45 67".to_string(),
            booking_number: None,
        };
        assert!(validate_contact(&details).is_ok());

        details.email = "awa@".to_string();
        assert!(validate_contact(&details).is_err());
    }
}
