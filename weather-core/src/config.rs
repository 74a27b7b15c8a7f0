use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::CityCatalog;

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_CITY: &str = "Alger";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org";

/// OpenWeather credentials and endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub icon_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "Oran"
/// cities = ["Oran", "Blida"]
///
/// [openweather]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_city: String,
    pub cities: CityCatalog,
    pub openweather: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.to_string(),
            cities: CityCatalog::default(),
            openweather: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather.api_key = Some(api_key);
    }

    /// API key from `OPENWEATHER_API_KEY`, falling back to the config file.
    pub fn api_key(&self) -> Result<String> {
        self.api_key_with(std::env::var(API_KEY_ENV).ok())
    }

    /// Like [`Config::api_key`], with the environment value passed in.
    pub fn api_key_with(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.openweather.api_key.clone().filter(|k| !k.trim().is_empty()))
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: set {API_KEY_ENV} or run `weather configure` and enter your API key."
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_screen() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city, "Alger");
        assert_eq!(cfg.cities.len(), 10);
        assert_eq!(cfg.openweather.base_url, DEFAULT_API_BASE_URL);
        assert!(cfg.openweather.api_key.is_none());
    }

    #[test]
    fn api_key_errors_when_missing() {
        let err = Config::default().api_key_with(None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: set OPENWEATHER_API_KEY"));
    }

    #[test]
    fn env_value_overrides_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.api_key_with(None).unwrap(), "FILE_KEY");
        assert_eq!(cfg.api_key_with(Some("ENV_KEY".into())).unwrap(), "ENV_KEY");
        assert_eq!(cfg.api_key_with(Some("  ".into())).unwrap(), "FILE_KEY");
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_city, DEFAULT_CITY);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.default_city = "Oran".into();
        cfg.cities = CityCatalog::new(vec!["Oran".into(), "Blida".into()]);
        cfg.set_api_key("KEY".into());
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_city, "Oran");
        assert_eq!(loaded.cities.suggestions("b"), vec!["Blida"]);
        assert_eq!(loaded.openweather.api_key.as_deref(), Some("KEY"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[openweather]\napi_key = \"abc\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_city, DEFAULT_CITY);
        assert_eq!(cfg.cities, CityCatalog::default());
        assert_eq!(cfg.openweather.icon_base_url, DEFAULT_ICON_BASE_URL);
        assert_eq!(cfg.api_key_with(None).unwrap(), "abc");
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_city = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
