//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Session defaults (RNG seed, energy step)
//! - An optional custom task catalog
//! - Decorative effect tuning
//!
//! Configuration is stored at `~/.config/moodsprout/config.toml`.
//! Session progress itself is never written to disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::TaskCatalog;
use crate::energy::DEFAULT_STEP;
use crate::error::{ConfigError, Result};

/// Returns `~/.config/moodsprout[-dev]/` based on MOODSPROUT_ENV.
///
/// Set MOODSPROUT_ENV=dev to use development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MOODSPROUT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("moodsprout-dev")
    } else {
        base_dir.join("moodsprout")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::NoConfigDir(e.to_string()))?;
    Ok(dir)
}

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed RNG seed; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_energy_step")]
    pub energy_step: u8,
}

/// Task content overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Path to a TOML task catalog replacing the built-in one.
    #[serde(default)]
    pub tasks_file: Option<String>,
}

/// Decorative effect tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_confetti_count")]
    pub confetti_count: u32,
    #[serde(default = "default_floating_emoji_count")]
    pub floating_emoji_count: u32,
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

fn default_energy_step() -> u8 {
    DEFAULT_STEP
}
fn default_confetti_count() -> u32 {
    100
}
fn default_floating_emoji_count() -> u32 {
    10
}
fn default_mobile_breakpoint() -> u32 {
    768
}
fn default_resize_debounce_ms() -> u64 {
    300
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            energy_step: default_energy_step(),
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            confetti_count: default_confetti_count(),
            floating_emoji_count: default_floating_emoji_count(),
            mobile_breakpoint: default_mobile_breakpoint(),
            resize_debounce_ms: default_resize_debounce_ms(),
        }
    }
}

impl EffectsConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn json_slot<'a>(
        root: &'a mut serde_json::Value,
        key: &str,
    ) -> Result<&'a mut serde_json::Value, ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get_mut(part).ok_or_else(unknown)?;
        }
        Ok(current)
    }

    /// Values to try for `value`, typed after the current one.
    fn candidate_values(
        existing: &serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<Vec<serde_json::Value>, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        // "none" clears optional values; required ones reject null later.
        let candidates = match existing {
            _ if matches!(value, "none" | "null") => vec![serde_json::Value::Null],
            serde_json::Value::Bool(_) => vec![serde_json::Value::Bool(
                value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
            )],
            serde_json::Value::Number(_) => {
                let n = value.parse::<u64>().map_err(|e| invalid(e.to_string()))?;
                vec![serde_json::Value::Number(n.into())]
            }
            // Unset optional: the field type decides, so offer both.
            serde_json::Value::Null => match value.parse::<u64>() {
                Ok(n) => vec![
                    serde_json::Value::Number(n.into()),
                    serde_json::Value::String(value.into()),
                ],
                Err(_) => vec![serde_json::Value::String(value.into())],
            },
            _ => vec![serde_json::Value::String(value.into())],
        };
        Ok(candidates)
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key, in memory only. Call `save` to persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        let candidates = Self::candidate_values(Self::json_slot(&mut json, key)?, key, value)?;

        let mut last_error = None;
        for candidate in candidates {
            *Self::json_slot(&mut json, key)? = candidate;
            match serde_json::from_value(json.clone()) {
                Ok(cfg) => {
                    *self = cfg;
                    return Ok(());
                }
                Err(e) => last_error = Some(e.to_string()),
            }
        }
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: last_error.unwrap_or_default(),
        })
    }

    /// The configured task catalog, or the built-in one.
    pub fn catalog(&self) -> Result<TaskCatalog> {
        match &self.content.tasks_file {
            Some(path) => TaskCatalog::load(Path::new(path)),
            None => Ok(TaskCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.session.energy_step, 20);
        assert_eq!(parsed.effects.confetti_count, 100);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("[session]\nseed = 7\n").unwrap();
        assert_eq!(cfg.session.seed, Some(7));
        assert_eq!(cfg.session.energy_step, 20);
        assert_eq!(cfg.effects.mobile_breakpoint, 768);
        assert_eq!(cfg.effects.resize_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("session.energy_step").as_deref(), Some("20"));
        assert_eq!(cfg.get("session.seed").as_deref(), Some("null"));
        assert!(cfg.get("session.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_numbers_and_optionals() {
        let mut cfg = Config::default();
        cfg.set("session.energy_step", "25").unwrap();
        cfg.set("session.seed", "42").unwrap();
        cfg.set("content.tasks_file", "/tmp/tasks.toml").unwrap();
        assert_eq!(cfg.session.energy_step, 25);
        assert_eq!(cfg.session.seed, Some(42));
        assert_eq!(cfg.content.tasks_file.as_deref(), Some("/tmp/tasks.toml"));

        cfg.set("session.seed", "none").unwrap();
        assert_eq!(cfg.session.seed, None);
        cfg.set("content.tasks_file", "none").unwrap();
        assert_eq!(cfg.content.tasks_file, None);
    }

    #[test]
    fn set_digits_follow_field_type() {
        let mut cfg = Config::default();
        cfg.set("content.tasks_file", "2024").unwrap();
        assert_eq!(cfg.content.tasks_file.as_deref(), Some("2024"));
        cfg.set("session.seed", "2024").unwrap();
        assert_eq!(cfg.session.seed, Some(2024));
        assert!(matches!(
            cfg.set("session.seed", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("session.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("nope.energy_step", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("session.energy_step", "lots"),
            Err(ConfigError::InvalidValue { .. })
        ));
        // Out of range for u8.
        assert!(matches!(
            cfg.set("session.energy_step", "300"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("session.energy_step", "none"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.effects.floating_emoji_count = 3;
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn catalog_defaults_to_builtin() {
        let catalog = Config::default().catalog().unwrap();
        assert_eq!(catalog.len(), TaskCatalog::builtin().len());
    }

    #[test]
    fn catalog_from_tasks_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.toml");
        std::fs::write(&path, "[[moods]]\nname = \"calm\"\ntasks = [\"breathe\"]\n").unwrap();
        let mut cfg = Config::default();
        cfg.content.tasks_file = Some(path.to_string_lossy().into_owned());
        let catalog = cfg.catalog().unwrap();
        assert_eq!(catalog.resolve("calm").map(|m| m.as_str()), Some("calm"));
    }
}
