use anyhow::Result;
use dialoguer::{Input, Password, Select};

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub fn prompt_login(username: Option<String>, password: Option<String>) -> Result<LoginInput> {
    let username = if let Some(u) = username {
        u
    } else {
        Input::<String>::new().with_prompt("Username").interact()?
    };

    let password = if let Some(p) = password {
        p
    } else {
        Password::new().with_prompt("Password").interact()?
    };

    Ok(LoginInput { username, password })
}

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_delete_confirmation(kind: &str, id: u64) -> Result<bool> {
    prompt_confirmation(
        &format!("Delete {} #{}? This cannot be undone.", kind, id),
        false, // Default to "No" for safety
    )
}

/// Ask for a value unless one was given on the command line
pub fn text_or_prompt(value: Option<String>, prompt: &str, default: Option<&str>) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    let mut input_prompt = Input::<String>::new().with_prompt(prompt);
    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }
    Ok(input_prompt.interact()?)
}

/// Hidden input typed twice
pub fn prompt_new_password() -> Result<String> {
    let password = Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    Ok(password)
}
