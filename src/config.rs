use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub bearer_token: Option<String>,
}

fn default_endpoint() -> String {
    "http://localhost:8000/graphql".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            bearer_token: None,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("directive-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".directive-cli")
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

        debug!("Loaded config with endpoint {}", config.endpoint);
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

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        info!("Setting API endpoint to {}", endpoint);
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_bearer_token(&mut self, token: Option<String>) -> Result<()> {
        match &token {
            Some(_) => info!("Setting API bearer token"),
            None => info!("Clearing API bearer token"),
        }
        self.bearer_token = token;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_local_endpoint() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:8000/graphql");
        assert_eq!(config.bearer_token, None);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config {
            endpoint: "https://api.example.gc.ca/graphql".into(),
            bearer_token: Some("token-abc".into()),
        };
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.bearer_token, config.bearer_token);
    }

    #[test]
    fn test_missing_endpoint_falls_back_to_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.endpoint, default_endpoint());
    }
}
