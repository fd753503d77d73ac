use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::schedule::duration::TimeFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub host: HostConfig,
    pub booking: BookingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    pub location: String,
    pub organization: String,
    pub timezone_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub time_format: String,
    pub default_view: String,
    pub first_day_of_week: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            tracing::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slotbook")
            .join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .expect("Failed to serialize config");
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn time_format(&self) -> TimeFormat {
        TimeFormat::from_config_value(&self.ui.time_format)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HostConfig {
                name: "Sanskar Yadav".to_string(),
                email: "sanskar@gmail.com".to_string(),
            },
            booking: BookingConfig {
                location: "Google Meet".to_string(),
                organization: "OneHash".to_string(),
                timezone_label: "India Standard Time".to_string(),
            },
            ui: UiConfig {
                time_format: "24h".to_string(),
                default_view: "Monthly".to_string(),
                first_day_of_week: "Sunday".to_string(),
            },
        }
    }
}
