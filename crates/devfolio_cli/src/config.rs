//! devfolio configuration file handling

use anyhow::{Context, Result};
use devfolio_content::{DEFAULT_BASE_URL, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "devfolio.toml";

/// Top-level configuration (devfolio.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DevfolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct SiteConfig {
    /// Absolute origin used for canonical and alternate URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct I18nConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Directory of `<code>.json` / `<code>.yaml` dictionaries.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub messages_dir: Option<PathBuf>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            messages_dir: None,
        }
    }
}

impl DevfolioConfig {
    /// Load an explicitly named config file. A missing file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config: DevfolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(dir) = config.i18n.messages_dir.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.i18n.messages_dir = Some(if dir.is_relative() {
                base.join(dir)
            } else {
                dir
            });
        }

        Ok(config)
    }

    /// Load `path` if given, otherwise `devfolio.toml` in `dir` when present,
    /// otherwise the defaults.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let default_path = dir.join(CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from_path(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DevfolioConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, DevfolioConfig::default());
        assert_eq!(config.site.base_url, "https://devportfolio.com");
        assert_eq!(config.i18n.default_locale, "es");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = DevfolioConfig::load(Some(&path), dir.path()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[i18n]\ndefault_locale = \"en\"\nmessages_dir = \"messages\"\n",
        )
        .unwrap();

        let config = DevfolioConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.i18n.messages_dir, Some(dir.path().join("messages")));
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site\nbase_url = 1").unwrap();
        let err = DevfolioConfig::load(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DevfolioConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url"));
        let back: DevfolioConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
