//! usb-forge configuration management

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub forge: ForgeSettings,
    pub registry: RegistrySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeSettings {
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Where the usb.ids registry is kept on disk
    #[serde(default = "RegistrySettings::default_registry_path")]
    pub path: PathBuf,
    /// Where to download the registry from when the file is absent
    #[serde(default = "RegistrySettings::default_url")]
    pub url: String,
}

impl RegistrySettings {
    fn default_registry_path() -> PathBuf {
        PathBuf::from(registry::REGISTRY_FILE)
    }

    fn default_url() -> String {
        registry::REGISTRY_URL.to_string()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            forge: ForgeSettings {
                log_level: "info".to_string(),
            },
            registry: RegistrySettings {
                path: RegistrySettings::default_registry_path(),
                url: RegistrySettings::default_url(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from the specified path
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p
        } else {
            // Try standard locations in order
            let candidates = vec![
                Self::default_path(),
                PathBuf::from("/etc/usb-forge/config.toml"),
            ];

            candidates
                .into_iter()
                .find(|p| p.exists())
                .ok_or_else(|| anyhow!("No configuration file found, using defaults"))?
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config.validate()?;

        tracing::info!("Loaded configuration from: {}", config_path.display());
        Ok(config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default() -> Self {
        match Self::load(None) {
            Ok(config) => config,
            Err(e) => {
                // Print to stderr since logging might not be initialized yet
                eprintln!("Config: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the specified path
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("usb-forge").join("config.toml")
        } else {
            PathBuf::from(".config/usb-forge/config.toml")
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.forge.log_level.as_str()) {
            return Err(anyhow!(
                "Invalid log level '{}', must be one of: {}",
                self.forge.log_level,
                valid_levels.join(", ")
            ));
        }

        if self.registry.url.is_empty() {
            return Err(anyhow!("Registry URL must not be empty"));
        }

        Ok(())
    }
}

/// Expand a user-supplied path (handles "~")
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
