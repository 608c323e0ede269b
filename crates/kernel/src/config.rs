//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding menu documents (default: ./menus).
    pub menus_dir: PathBuf,

    /// Menu rendered when none is named (default: main).
    pub default_menu: String,

    /// Leave out nodes that are not displayable (default: false).
    pub skip_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menus_dir: PathBuf::from("./menus"),
            default_menu: "main".to_string(),
            skip_hidden: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let menus_dir = lookup("MENUS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.menus_dir);

        let default_menu = lookup("DEFAULT_MENU")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_menu);

        let skip_hidden = match lookup("MENU_SKIP_HIDDEN") {
            Some(value) => {
                parse_bool(&value).context("MENU_SKIP_HIDDEN must be true/false/1/0")?
            }
            None => defaults.skip_hidden,
        };

        Ok(Self {
            menus_dir,
            default_menu,
            skip_hidden,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("MENUS_DIR", "/srv/menus"),
            ("DEFAULT_MENU", "footer"),
            ("MENU_SKIP_HIDDEN", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.menus_dir, PathBuf::from("/srv/menus"));
        assert_eq!(config.default_menu, "footer");
        assert!(config.skip_hidden);
    }

    #[test]
    fn blank_default_menu_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("DEFAULT_MENU", "  ")])).unwrap();
        assert_eq!(config.default_menu, "main");
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("MENU_SKIP_HIDDEN", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn parse_bool_variants() {
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool(" on ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());
    }
}
