use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const MIN_ADVANCE_DELAY_MS: u64 = 250;
const MAX_ADVANCE_DELAY_MS: u64 = 10_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
}

fn default_theme() -> String {
    "hanok-dusk".to_string()
}
fn default_advance_delay_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            advance_delay_ms: default_advance_delay_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hanjaro")
            .join("config.toml")
    }

    /// Verdict display time, clamped so a hand-edited config can't
    /// make rounds advance instantly or never.
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(
            self.advance_delay_ms
                .clamp(MIN_ADVANCE_DELAY_MS, MAX_ADVANCE_DELAY_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "hanok-dusk");
        assert_eq!(config.advance_delay_ms, 2000);
    }

    #[test]
    fn test_config_serde_defaults_from_partial_file() {
        let config: Config = toml::from_str("theme = \"paper-light\"\n").unwrap();
        assert_eq!(config.theme, "paper-light");
        assert_eq!(config.advance_delay_ms, 2000);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            theme: "charcoal".to_string(),
            advance_delay_ms: 1500,
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.advance_delay_ms, deserialized.advance_delay_ms);
    }

    #[test]
    fn test_advance_delay_clamps_both_ends() {
        let mut config = Config::default();
        assert_eq!(config.advance_delay(), Duration::from_millis(2000));

        config.advance_delay_ms = 0;
        assert_eq!(config.advance_delay(), Duration::from_millis(250));

        config.advance_delay_ms = 60_000;
        assert_eq!(config.advance_delay(), Duration::from_millis(10_000));
    }
}
