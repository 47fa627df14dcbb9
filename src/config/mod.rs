//! Bootstrap configuration for the composition root: which element to mount
//! into and which locales to activate. Defaults are compiled in; an embedder
//! may load overrides from a TOML file via `load_from_path`.
//!
//! # Examples
//!
//! ```
//! use weft::config::BootConfig;
//!
//! let config = BootConfig::default();
//! assert_eq!(config.host_selector, "#app");
//! assert_eq!(config.locale, "cn");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootConfig {
    #[serde(default = "default_host_selector")]
    pub host_selector: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            host_selector: default_host_selector(),
            locale: default_locale(),
            fallback_locale: default_fallback_locale(),
        }
    }
}

fn default_host_selector() -> String {
    defaults::DEFAULT_HOST_SELECTOR.to_string()
}

fn default_locale() -> String {
    defaults::DEFAULT_LOCALE.to_string()
}

fn default_fallback_locale() -> String {
    defaults::DEFAULT_FALLBACK_LOCALE.to_string()
}

pub fn load_from_path(path: &Path) -> Result<BootConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &BootConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).unwrap();
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = BootConfig {
            host_selector: "#root".to_string(),
            locale: "en".to_string(),
            fallback_locale: "cn".to_string(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("boot.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("boot.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, BootConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_from_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("boot.toml");
        fs::write(&config_path, "locale = \"en\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.locale, "en");
        assert_eq!(loaded.host_selector, defaults::DEFAULT_HOST_SELECTOR);
        assert_eq!(loaded.fallback_locale, defaults::DEFAULT_FALLBACK_LOCALE);
    }

    #[test]
    fn default_config_targets_app_with_cn_over_en() {
        let config = BootConfig::default();
        assert_eq!(config.host_selector, "#app");
        assert_eq!(config.locale, "cn");
        assert_eq!(config.fallback_locale, "en");
    }
}
