//! Process Configuration
//!
//! Read once at startup from the environment (a `.env` file is loaded
//! first when present).

use std::{env, fmt, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

use crate::upstream::{DEFAULT_API_BASE, DEFAULT_MODEL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// Built frontend bundle served for non-API paths
    pub static_dir: PathBuf,
    pub upstream: UpstreamConfig,
}

/// Settings for the outbound chat API call
#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Option<Duration>,
}

// Never print the key.
impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("OPENAI_API_KEY not set, upstream calls will be rejected");
        }

        let timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse("UPSTREAM_TIMEOUT_SECS", raw)?)),
            None => None,
        };

        Ok(Self {
            port: try_load(&lookup, "PORT", "3000")?,
            static_dir: try_load(&lookup, "STATIC_DIR", "dist")?,
            upstream: UpstreamConfig {
                api_key,
                model: try_load(&lookup, "OPENAI_MODEL", DEFAULT_MODEL)?,
                api_base: try_load(&lookup, "OPENAI_API_BASE", DEFAULT_API_BASE)?,
                timeout,
            },
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, raw)
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.upstream.api_key, "");
        assert_eq!(config.upstream.model, DEFAULT_MODEL);
        assert_eq!(config.upstream.api_base, DEFAULT_API_BASE);
        assert!(config.upstream.timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_API_BASE", "http://localhost:9000/v1"),
            ("STATIC_DIR", "/srv/kanban"),
            ("UPSTREAM_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream.api_key, "sk-test");
        assert_eq!(config.upstream.model, "gpt-4o-mini");
        assert_eq!(config.upstream.api_base, "http://localhost:9000/v1");
        assert_eq!(config.static_dir, PathBuf::from("/srv/kanban"));
        assert_eq!(config.upstream.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-secret")])).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
