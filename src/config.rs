//! Backend connection settings, read from the environment at startup

use crate::constants::*;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the scanning backend, without a trailing slash
    pub backend_url: String,
    /// Bearer token sent with every authenticated request
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank or invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match non_blank(lookup(ENV_BACKEND_URL)) {
            Some(url) => match reqwest::Url::parse(&url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                    config.backend_url = url.trim_end_matches('/').to_string();
                }
                Ok(parsed) => {
                    warn!(url = %url, scheme = parsed.scheme(), "Unsupported backend URL scheme, using default");
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Invalid backend URL, using default");
                }
            },
            None => debug!(var = ENV_BACKEND_URL, "Backend URL not set, using default"),
        }

        match non_blank(lookup(ENV_API_KEY)) {
            Some(key) => config.api_key = key,
            None => debug!(var = ENV_API_KEY, "API key not set, using default"),
        }

        config
    }

    /// API key with everything but the last four characters hidden, for logs
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
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
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.backend_url, "http://localhost:5000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "https://guard.example.com/api/"),
            (ENV_API_KEY, "  secret-token  "),
        ]));
        assert_eq!(config.backend_url, "https://guard.example.com/api");
        assert_eq!(config.api_key, "secret-token");
    }

    #[test]
    fn invalid_or_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "not a url"),
            (ENV_API_KEY, "   "),
        ]));
        assert_eq!(config, Config::default());

        let config = Config::from_lookup(lookup_from(&[(ENV_BACKEND_URL, "ftp://guard.example.com")]));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn masked_key_keeps_only_the_tail() {
        let config = Config {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            api_key: "abcdefgh".to_string(),
        };
        assert_eq!(config.masked_api_key(), "****efgh");

        let short = Config {
            api_key: "abc".to_string(),
            ..Config::default()
        };
        assert_eq!(short.masked_api_key(), "***");
    }
}
