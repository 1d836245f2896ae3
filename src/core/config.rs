//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::report::Locale;

/// Fleet configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message language
    pub lang: Option<Locale>,

    /// Colored headings
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/fleet/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "fleet")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Read one config layer; missing or malformed files are skipped
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    /// Environment layer (`FLEET_LANG`, `FLEET_COLOR`)
    fn from_env(var: impl Fn(&str) -> Option<String>) -> Config {
        Config {
            lang: var("FLEET_LANG").and_then(|v| v.parse().ok()),
            color: var("FLEET_COLOR").and_then(|v| parse_bool(&v)),
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.lang.is_some() {
            self.lang = other.lang;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    /// Effective language, with an optional command-line override
    pub fn lang(&self, flag: Option<Locale>) -> Locale {
        flag.or(self.lang).unwrap_or_default()
    }

    /// Whether headings should be colored
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_merge_precedence() {
        let mut config = Config {
            lang: Some(Locale::En),
            color: Some(true),
        };
        config.merge(Config {
            lang: Some(Locale::Uk),
            color: None,
        });
        assert_eq!(config.lang, Some(Locale::Uk));
        assert_eq!(config.color, Some(true));
    }

    #[test]
    fn test_from_env() {
        let vars: HashMap<&str, &str> = [("FLEET_LANG", "uk"), ("FLEET_COLOR", "off")].into();
        let config = Config::from_env(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.lang, Some(Locale::Uk));
        assert_eq!(config.color, Some(false));

        let config = Config::from_env(|_| Some("garbage".to_string()));
        assert_eq!(config.lang, None);
        assert_eq!(config.color, None);
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            lang: Some(Locale::Uk),
            color: None,
        };
        assert_eq!(config.lang(None), Locale::Uk);
        assert_eq!(config.lang(Some(Locale::En)), Locale::En);
        assert_eq!(Config::default().lang(None), Locale::En);
        assert!(Config::default().color());
    }

    #[test]
    fn test_read_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "lang: uk\ncolor: false\n").unwrap();
        let config = Config::read_file(&path).unwrap();
        assert_eq!(config.lang, Some(Locale::Uk));
        assert_eq!(config.color, Some(false));

        std::fs::write(&path, "lang: [not, a, locale]\n").unwrap();
        assert!(Config::read_file(&path).is_none());
        assert!(Config::read_file(&tmp.path().join("missing.yaml")).is_none());
    }
}
