use anyhow::Result;
use dialoguer::{Input, Password, Select};

use crate::api::constants::{API_VERSIONS, DEFAULT_BASE_URL};
use crate::config::ConnectionConfig;

pub fn prompt_environment_name(default_name: Option<String>) -> Result<String> {
    if let Some(name) = default_name {
        Ok(name)
    } else {
        let name = Input::<String>::new()
            .with_prompt("Environment name (e.g., 'production', 'test')")
            .interact()?;
        Ok(name)
    }
}

/// Interactive confirmation prompt using arrow-key navigable selection.
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

pub fn prompt_overwrite_confirmation(env_name: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Environment '{}' already exists. Overwrite?", env_name),
        false, // Default to "No" for safety
    )
}

pub fn prompt_remove_confirmation(env_name: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Remove environment '{}'?", env_name),
        false, // Default to "No" for safety
    )
}

/// Gather connection details, prompting only for what the caller did not
/// already supply via flags.
pub fn prompt_connection(
    base_url: Option<String>,
    api_version: Option<String>,
    api_key: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<ConnectionConfig> {
    let base_url_val = if let Some(url) = base_url {
        url
    } else {
        Input::<String>::new()
            .with_prompt("Insyte API base URL")
            .default(DEFAULT_BASE_URL.to_string())
            .interact()?
    };

    let api_version_val = if let Some(version) = api_version {
        version
    } else {
        let selection = Select::new()
            .with_prompt("API version")
            .items(&API_VERSIONS)
            .default(1) // v2
            .interact()?;
        API_VERSIONS[selection].to_string()
    };

    // Flags decide the credential shape when present; otherwise ask.
    let (api_key_val, username_val, password_val) = if let Some(key) = api_key {
        (Some(key), None, None)
    } else if username.is_some() || password.is_some() {
        let username_val = if let Some(u) = username {
            u
        } else {
            Input::<String>::new().with_prompt("Username").interact()?
        };
        let password_val = if let Some(p) = password {
            p
        } else {
            Password::new().with_prompt("Password").interact()?
        };
        (None, Some(username_val), Some(password_val))
    } else {
        let selection = Select::new()
            .with_prompt("Authentication method")
            .items(&["API key", "Username and password"])
            .default(0)
            .interact()?;

        if selection == 0 {
            let key = Password::new().with_prompt("API key").interact()?;
            (Some(key), None, None)
        } else {
            let username_val = Input::<String>::new().with_prompt("Username").interact()?;
            let password_val = Password::new().with_prompt("Password").interact()?;
            (None, Some(username_val), Some(password_val))
        }
    };

    Ok(ConnectionConfig {
        base_url: base_url_val,
        api_version: api_version_val,
        api_key: api_key_val,
        username: username_val,
        password: password_val,
    })
}
