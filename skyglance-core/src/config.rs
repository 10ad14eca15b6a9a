use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_CITY: &str = "New York";

/// Environment variables consulted by [`Config::apply_env`], in priority order.
pub const API_KEY_VARS: &[&str] = &["SKYGLANCE_API_KEY", "OPENWEATHER_API_KEY"];
pub const BASE_URL_VAR: &str = "SKYGLANCE_BASE_URL";

/// Widget configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Lisbon"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Provider root, without the `/data/2.5` suffix. Overridable for tests.
    pub base_url: Option<String>,

    /// City searched when the widget first mounts.
    pub default_city: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from disk, then let the process environment override it.
    pub fn load_with_env() -> Result<Self> {
        let mut cfg = Self::load()?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Override file values with whatever `lookup` finds. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_VARS.iter().find_map(|name| non_blank(*name)) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_blank(BASE_URL_VAR) {
            self.base_url = Some(url);
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skyglance", "skyglance")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `skyglance configure` or set {}.",
                    API_KEY_VARS[0]
                )
            })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn default_city(&self) -> &str {
        self.default_city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("skyglance configure"));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.default_city(), "New York");
    }

    #[test]
    fn parses_toml_file_contents() {
        let cfg = Config::from_toml(
            r#"
            api_key = "FILE_KEY"
            base_url = "http://localhost:9000/"
            default_city = "Lisbon"
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.api_key().unwrap(), "FILE_KEY");
        assert_eq!(cfg.base_url(), "http://localhost:9000");
        assert_eq!(cfg.default_city(), "Lisbon");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config {
            api_key: Some("FILE_KEY".into()),
            base_url: None,
            default_city: None,
        };

        cfg.apply_env(env(&[
            ("OPENWEATHER_API_KEY", "ENV_KEY"),
            ("SKYGLANCE_BASE_URL", "http://127.0.0.1:1234"),
        ]));

        assert_eq!(cfg.api_key().unwrap(), "ENV_KEY");
        assert_eq!(cfg.base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn primary_env_var_wins_and_blanks_are_ignored() {
        let mut cfg = Config::default();
        cfg.apply_env(env(&[
            ("SKYGLANCE_API_KEY", "PRIMARY"),
            ("OPENWEATHER_API_KEY", "SECONDARY"),
            ("SKYGLANCE_BASE_URL", "   "),
        ]));

        assert_eq!(cfg.api_key().unwrap(), "PRIMARY");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn set_api_key_trims_and_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("  KEY  ".into());

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let back = Config::from_toml(&text).expect("parses");
        assert_eq!(back.api_key().unwrap(), "KEY");
    }
}
