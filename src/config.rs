//! Configuration loading.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
///
/// Every field is defaulted so the bot can start without a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Bot identity.
    #[serde(default)]
    pub bot: BotConfig,
    /// Console session settings for the local driver.
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Platform ids granted admin at startup.
    #[serde(default)]
    pub admins: Vec<String>,
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// The address token messages must start with to reach the bot.
    #[serde(default = "default_address")]
    pub address: String,
    /// Display name used in log output.
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            name: default_name(),
        }
    }
}

/// Identity assumed by the local console driver.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Sender id attached to console-typed messages.
    #[serde(default = "default_console_user")]
    pub user: String,
    /// Channel name replies are printed under.
    #[serde(default = "default_console_channel")]
    pub channel: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            user: default_console_user(),
            channel: default_console_channel(),
        }
    }
}

fn default_address() -> String {
    "@liftoff".to_string()
}

fn default_name() -> String {
    "liftoff".to_string()
}

fn default_console_user() -> String {
    "UCONSOLE".to_string()
}

fn default_console_channel() -> String {
    "console".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.bot.address, "@liftoff");
        assert_eq!(config.bot.name, "liftoff");
        assert!(config.admins.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
admins = ["U12AB34CD"]

[bot]
address = "@mybot"
"#
        )
        .unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.bot.address, "@mybot");
        assert_eq!(config.admins, vec!["U12AB34CD".to_string()]);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.console.channel, "console");
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bot = 42").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
