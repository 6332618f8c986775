// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! operator preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[contact]` - Recipient identity, subject line, and the contact info
//!   shown on the page (phone, address)
//! - `[smtp]` - Outbound mail relay and credentials
//! - `[window]` - Initial window dimensions
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `VITRINA_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Vitrina";
const CONFIG_DIR_ENV: &str = "VITRINA_CONFIG_DIR";

/// Recipient identity and page-level contact information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Fixed recipient of every inquiry email.
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Fixed subject line of every inquiry email.
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Phone number shown in the contact panel.
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Street address shown in the contact panel.
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            subject: default_subject(),
            phone: default_phone(),
            address: default_address(),
        }
    }
}

impl ContactConfig {
    /// WhatsApp deep link derived from the configured phone number.
    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("https://api.whatsapp.com/send?phone={digits}")
    }
}

/// Outbound mail relay settings. The authenticated account doubles as the
/// sender identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,

    /// Relay account, also used as the sender mailbox.
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Initial window dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub smtp: SmtpConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

/// Resolves the directory holding `settings.toml`.
///
/// `override_dir` (from `--config-dir`) wins over the `VITRINA_CONFIG_DIR`
/// environment variable, which wins over the platform config directory.
fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// A missing file is not an error. A present-but-malformed file yields the
/// defaults plus a warning string for the shell to surface.
pub fn load(override_dir: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = config_dir(override_dir).map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("No se pudo leer {}: {}", path.display(), err)),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            contact: ContactConfig {
                recipient: "ventas@example.com".to_string(),
                subject: "Consulta".to_string(),
                ..ContactConfig::default()
            },
            smtp: SmtpConfig {
                host: "smtp.example.com".to_string(),
                username: "bot@example.com".to_string(),
                password: "secret".to_string(),
            },
            window: WindowConfig {
                width: 900,
                height: 600,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[smtp]\nusername = \"bot@example.com\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.contact.recipient, DEFAULT_RECIPIENT);
        assert_eq!(loaded.smtp.username, "bot@example.com");
        assert_eq!(loaded.smtp.host, DEFAULT_SMTP_HOST);
        assert_eq!(loaded.window.width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn malformed_file_degrades_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn absent_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn whatsapp_url_strips_non_digits() {
        let contact = ContactConfig {
            phone: "+57 300 610 4153".to_string(),
            ..ContactConfig::default()
        };
        assert_eq!(
            contact.whatsapp_url(),
            "https://api.whatsapp.com/send?phone=573006104153"
        );
    }
}
