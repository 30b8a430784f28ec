//! Server configuration
//!
//! Read from the process environment (after `.env` is loaded by the binary).

use crate::error::AdvisorError;
use crate::Result;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:8501",
    "http://127.0.0.1:8501",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS. A single `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// `HOST`, `PORT` (or `API_PORT`) and `ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AdvisorError::Config(format!("invalid port '{}': {}", raw, e))
            })?,
            None => defaults.port,
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
                if origins.is_empty() {
                    return Err(AdvisorError::Config(
                        "ALLOWED_ORIGINS is set but lists no origins".to_string(),
                    ));
                }
                origins
            }
            None => defaults.allowed_origins,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_port_fallback_and_origins() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("API_PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test ,"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = ServerConfig::from_lookup(lookup(&[("PORT", "7000"), ("API_PORT", "9090")])).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_wildcard_origin() {
        let config = ServerConfig::from_lookup(lookup(&[("ALLOWED_ORIGINS", "*")])).unwrap();
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(AdvisorError::Config(_))
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("ALLOWED_ORIGINS", " , ")])),
            Err(AdvisorError::Config(_))
        ));
    }
}
