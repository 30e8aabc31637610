use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::api::constants::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_MAX_PAGES,
    DEFAULT_PAGE_SIZE,
};
use crate::auth::{Connection, Credentials};

/// One named environment in the config file. Credential completeness is
/// validated when the environment is turned into a [`Connection`], not at
/// load time, so a half-edited file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl ConnectionConfig {
    /// Validate and convert into a usable connection. Exactly one credential
    /// shape must be present: an API key, or a username/password pair.
    pub fn to_connection(&self) -> Result<Connection> {
        let credentials = match (&self.api_key, &self.username, &self.password) {
            (Some(api_key), _, _) => Credentials::ApiKey(api_key.clone()),
            (None, Some(username), Some(password)) => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            (None, Some(_), None) => {
                anyhow::bail!("Environment has a username but no password")
            }
            _ => anyhow::bail!(
                "Environment has no credentials; set api_key or username/password"
            ),
        };

        Ok(Connection::new(
            self.base_url.clone(),
            self.api_version.clone(),
            credentials,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_environment: Option<String>,
    #[serde(default)]
    pub environments: HashMap<String, ConnectionConfig>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// `$top` used by the paginated fetcher when the caller sets none.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Hard cap on pagination iterations per list request.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Result cap for single-page list requests without an explicit limit.
    #[serde(default = "default_list_limit")]
    pub default_list_limit: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_list_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_pages: default_max_pages(),
            default_list_limit: default_list_limit(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("insyte-cli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".insyte-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!(
            "Loaded config with {} environments",
            config.environments.len()
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_environment(&mut self, name: String, connection: ConnectionConfig) -> Result<()> {
        info!("Adding environment: {}", name);
        self.environments.insert(name.clone(), connection);

        if self.current_environment.is_none() {
            self.current_environment = Some(name.clone());
            info!("Set {} as current environment", name);
        }

        self.save()
    }

    pub fn get_current_connection(&self) -> Option<&ConnectionConfig> {
        let current_env = self.current_environment.as_ref()?;
        self.environments.get(current_env)
    }

    pub fn get_current_environment_name(&self) -> Option<&String> {
        self.current_environment.as_ref()
    }

    pub fn set_current_environment(&mut self, name: String) -> Result<()> {
        if !self.environments.contains_key(&name) {
            anyhow::bail!("Environment '{}' not found", name);
        }

        info!("Setting current environment to: {}", name);
        self.current_environment = Some(name);
        self.save()
    }

    pub fn list_environments(&self) -> Vec<&String> {
        self.environments.keys().collect()
    }

    pub fn remove_environment(&mut self, name: &str) -> Result<()> {
        if self.environments.remove(name).is_none() {
            anyhow::bail!("Environment '{}' not found", name);
        }

        info!("Removing environment: {}", name);
        if self.current_environment.as_deref() == Some(name) {
            warn!("Removed current environment, clearing current selection");
            self.current_environment = None;
        }

        self.save()
    }
}
