use anyhow::Result;
use log::info;
use std::path::Path;

use crate::api::constants::{DEFAULT_API_VERSION, DEFAULT_BASE_URL};

/// Authentication material for the Insyte API.
///
/// Two credential shapes are supported: an API key sent as a bearer token,
/// or a username/password pair sent as HTTP Basic auth. Which one is used
/// depends on what the operator configured.
#[derive(Debug, Clone)]
pub enum Credentials {
    ApiKey(String),
    Basic { username: String, password: String },
}

impl Credentials {
    /// Short label for status output. Never exposes the secret itself.
    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::ApiKey(_) => "api key",
            Credentials::Basic { .. } => "basic auth",
        }
    }
}

/// Everything needed to reach one Insyte instance.
#[derive(Debug, Clone)]
pub struct Connection {
    pub base_url: String,
    pub api_version: String,
    pub credentials: Credentials,
}

impl Connection {
    pub fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            credentials,
        }
    }

    /// Build a connection from `INSYTE_*` environment variables.
    ///
    /// `INSYTE_API_KEY` wins over `INSYTE_USERNAME`/`INSYTE_PASSWORD` when
    /// both are present. Base URL and API version fall back to the hosted
    /// defaults.
    pub fn from_env() -> Result<Connection> {
        info!("Importing connection from environment variables");

        let base_url =
            std::env::var("INSYTE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_version =
            std::env::var("INSYTE_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let credentials = if let Ok(api_key) = std::env::var("INSYTE_API_KEY") {
            Credentials::ApiKey(api_key)
        } else {
            let username = std::env::var("INSYTE_USERNAME").map_err(|_| {
                anyhow::anyhow!("Neither INSYTE_API_KEY nor INSYTE_USERNAME is set")
            })?;
            let password = std::env::var("INSYTE_PASSWORD")
                .map_err(|_| anyhow::anyhow!("INSYTE_USERNAME is set but INSYTE_PASSWORD is not"))?;
            Credentials::Basic { username, password }
        };

        Ok(Connection::new(base_url, api_version, credentials))
    }

    /// Build a connection from a specific `.env` file.
    pub fn from_env_file(path: &str) -> Result<Connection> {
        info!("Importing connection from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        dotenvy::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?;

        Self::from_env()
    }
}
