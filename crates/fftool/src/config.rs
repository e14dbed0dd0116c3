//! Configuration management

use ffcore::format::CUSTOM_ICON_RESOURCE_ID;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub icon: IconConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Also write an AppleDouble `._` sidecar
    pub apple_double: bool,
}

/// How artifacts are written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Raw,
    Hex,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    pub resource_id: i16,
    pub set_custom_icon_flag: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::Raw,
                apple_double: false,
            },
            icon: IconConfig {
                resource_id: CUSTOM_ICON_RESOURCE_ID,
                set_custom_icon_flag: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
