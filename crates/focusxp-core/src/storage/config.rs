//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default session length and willpower for new sessions
//! - Default daily objective
//! - Log filter
//!
//! Configuration is stored at `<data dir>/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::model::{SessionLength, WillpowerLevel};

/// Defaults applied when a session is started without explicit inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_length")]
    pub default_length: String,
    #[serde(default = "default_willpower")]
    pub default_willpower: String,
}

/// Default daily commitment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveConfig {
    #[serde(default = "default_session_count")]
    pub session_count: u32,
    #[serde(default = "default_session_duration")]
    pub session_duration: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, e.g. `"warn"` or `"focusxp_core=debug"`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub objective: ObjectiveConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_session_length() -> String {
    "25".into()
}
fn default_willpower() -> String {
    "medium".into()
}
fn default_session_count() -> u32 {
    4
}
fn default_session_duration() -> u32 {
    25
}
fn default_log_filter() -> String {
    "warn".into()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_length: default_session_length(),
            default_willpower: default_willpower(),
        }
    }
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            session_count: default_session_count(),
            session_duration: default_session_duration(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
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

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        data_dir()
            .map(|dir| dir.join("config.toml"))
            .map_err(|e| ConfigError::LoadFailed {
                path: PathBuf::from("config.toml"),
                message: e.to_string(),
            })
    }

    /// Load from disk, writing and returning defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// key's type or domain, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate(key)?;
        *self = updated;
        Ok(())
    }

    fn validate(&self, key: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        self.session
            .default_length
            .parse::<SessionLength>()
            .map_err(|e| invalid(e.to_string()))?;
        self.session
            .default_willpower
            .parse::<WillpowerLevel>()
            .map_err(|e| invalid(e.to_string()))?;
        if self.objective.session_count == 0 {
            return Err(invalid("session_count must be at least 1".into()));
        }
        Ok(())
    }

    /// Session length to use when none is given. Falls back to 25 minutes.
    pub fn default_length(&self) -> SessionLength {
        self.session
            .default_length
            .parse()
            .unwrap_or(SessionLength::Short)
    }

    /// Willpower to use when none is given. Falls back to medium.
    pub fn default_willpower(&self) -> WillpowerLevel {
        self.session
            .default_willpower
            .parse()
            .unwrap_or(WillpowerLevel::Medium)
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
        assert_eq!(parsed.session.default_length, "25");
        assert_eq!(parsed.objective.session_count, 4);
        assert_eq!(parsed.logging.filter, "warn");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let parsed: Config = toml::from_str("[objective]\nsession_count = 6\n").unwrap();
        assert_eq!(parsed.objective.session_count, 6);
        assert_eq!(parsed.objective.session_duration, 25);
        assert_eq!(parsed.default_willpower(), WillpowerLevel::Medium);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("session.default_willpower").as_deref(), Some("medium"));
        assert_eq!(cfg.get("objective.session_count").as_deref(), Some("4"));
        assert!(cfg.get("session.missing_key").is_none());
        assert!(cfg.get("session").is_none());
    }

    #[test]
    fn apply_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.apply("objective.session_count", "6").unwrap();
        cfg.apply("session.default_length", "90").unwrap();
        assert_eq!(cfg.objective.session_count, 6);
        assert_eq!(cfg.default_length(), SessionLength::Long);
    }

    #[test]
    fn apply_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("session.nonexistent", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.apply("objective.session_count", "many").is_err());
        assert!(cfg.apply("session.default_willpower", "heroic").is_err());
        assert!(cfg.apply("objective.session_count", "0").is_err());
        assert_eq!(cfg.objective.session_count, 4);
    }
}
