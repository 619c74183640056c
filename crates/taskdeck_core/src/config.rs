//! Runtime configuration loaded from environment variables.
//!
//! | Variable              | Meaning                                    |
//! |-----------------------|--------------------------------------------|
//! | `TASKDECK_LOG_LEVEL`  | `trace|debug|info|warn|error`              |
//! | `TASKDECK_LOG_DIR`    | absolute log directory; unset = no logging |
//! | `TASKDECK_LATENCY_MS` | simulated per-operation delay; `0` = off   |

use crate::latency::{LatencyHook, NoLatency, SimulatedLatency};
use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const ENV_LOG_LEVEL: &str = "TASKDECK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKDECK_LOG_DIR";
pub const ENV_LATENCY_MS: &str = "TASKDECK_LATENCY_MS";

/// Configuration value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid value for {key}: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Core runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// `None` disables simulated latency.
    pub latency: Option<Duration>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            latency: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR.to_string(),
                    message: format!("must be an absolute path, got `{dir}`"),
                });
            }
            config.log_dir = Some(path);
        }

        if let Some(raw) = read(ENV_LATENCY_MS) {
            let millis = raw.parse::<u64>().map_err(|err| ConfigError::InvalidValue {
                key: ENV_LATENCY_MS.to_string(),
                message: err.to_string(),
            })?;
            config.latency = (millis > 0).then(|| Duration::from_millis(millis));
        }

        Ok(config)
    }

    /// Latency hook matching this configuration.
    pub fn latency_hook(&self) -> Arc<dyn LatencyHook> {
        match self.latency {
            Some(delay) => Arc::new(SimulatedLatency::uniform(delay)),
            None => Arc::new(NoLatency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_LATENCY_MS, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(config.log_dir.is_none());
        assert!(config.latency.is_none());
    }

    #[test]
    fn reads_all_known_keys() {
        let dir = std::env::temp_dir();
        let dir_str = dir.to_str().unwrap().to_string();
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, dir_str.as_str()),
            (ENV_LATENCY_MS, " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(dir));
        assert_eq!(config.latency, Some(Duration::from_millis(250)));
    }

    #[test]
    fn zero_latency_disables_simulation() {
        let config = CoreConfig::from_lookup(lookup(&[(ENV_LATENCY_MS, "0")])).unwrap();
        assert!(config.latency.is_none());
    }

    #[test]
    fn rejects_relative_log_dir_and_bad_latency() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "logs/dev")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_LOG_DIR));

        let err = CoreConfig::from_lookup(lookup(&[(ENV_LATENCY_MS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_LATENCY_MS));
    }
}
