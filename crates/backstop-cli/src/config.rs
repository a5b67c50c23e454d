use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use backstop_client::ClientConfig;

pub const DEFAULT_API_BASE: &str = "https://api.compose.io/2016-07";

const TOKEN_ENV: &str = "BACKSTOP_API_TOKEN";

/// Optional `~/.config/backstop/config.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base: Option<String>,
    token: Option<String>,
}

#[derive(Debug)]
pub struct CliConfig {
    pub api_base: String,
    pub token: String,
}

impl CliConfig {
    /// Resolve configuration: flag/env override, then config file, then
    /// built-in default.
    ///
    /// An absent token resolves to an empty string and goes on the wire
    /// as-is; the provider's authorization error is the failure surface,
    /// there is no local check.
    pub fn load(api_base_override: Option<String>) -> Result<Self> {
        let file = read_config_file()?;
        let env_token = std::env::var(TOKEN_ENV).ok();
        Ok(resolve(file, api_base_override, env_token))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_base, &self.token)
    }
}

fn resolve(
    file: ConfigFile,
    api_base_override: Option<String>,
    env_token: Option<String>,
) -> CliConfig {
    let api_base = api_base_override
        .or(file.api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let token = env_token.or(file.token).unwrap_or_default();

    CliConfig { api_base, token }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("backstop").join("config.toml"))
}

fn read_config_file() -> Result<ConfigFile> {
    let Some(path) = config_file_path() else {
        return Ok(ConfigFile::default());
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid config file: {}", path.display()))
}
