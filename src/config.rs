//! Runtime configuration read from the environment
//!
//! | Variable | Default |
//! |---|---|
//! | `PICTO_LINGUA_API_URL` | `http://localhost:8080/api` |
//! | `PICTO_LINGUA_LANGUAGE` | `english` (`english` or `dutch`) |
//! | `PICTO_LINGUA_TIMEOUT_SECS` | `30` |
//! | `PICTO_LINGUA_SESSION_ID` | unset; a saved session to resume |

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SUPPORTED_LANGUAGES: [&str; 2] = ["english", "dutch"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must start with http:// or https://, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be one of english, dutch; got {value:?}")]
    UnsupportedLanguage { var: &'static str, value: String },
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
    pub resume_session_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            resume_session_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(url) = get("PICTO_LINGUA_API_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    var: "PICTO_LINGUA_API_URL",
                    value: url,
                });
            }
            config.api_url = url;
        }

        if let Some(language) = get("PICTO_LINGUA_LANGUAGE") {
            let language = language.to_lowercase();
            if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
                return Err(ConfigError::UnsupportedLanguage {
                    var: "PICTO_LINGUA_LANGUAGE",
                    value: language,
                });
            }
            config.language = language;
        }

        if let Some(timeout) = get("PICTO_LINGUA_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout_secs = secs,
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: "PICTO_LINGUA_TIMEOUT_SECS",
                        value: timeout,
                    });
                }
            }
        }

        config.resume_session_id = get("PICTO_LINGUA_SESSION_ID");
        Ok(config)
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
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("PICTO_LINGUA_API_URL", "https://lingua.example/api"),
            ("PICTO_LINGUA_LANGUAGE", "Dutch"),
            ("PICTO_LINGUA_TIMEOUT_SECS", "5"),
            ("PICTO_LINGUA_SESSION_ID", "session_42"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://lingua.example/api");
        assert_eq!(config.language, "dutch");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.resume_session_id.as_deref(), Some("session_42"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("PICTO_LINGUA_SESSION_ID", "  ")])).unwrap();
        assert_eq!(config.resume_session_id, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[("PICTO_LINGUA_API_URL", "localhost:8080")]));
        assert!(matches!(err, Err(ConfigError::InvalidUrl { .. })));

        let err = Config::from_lookup(lookup(&[("PICTO_LINGUA_LANGUAGE", "klingon")]));
        assert!(matches!(err, Err(ConfigError::UnsupportedLanguage { .. })));

        let err = Config::from_lookup(lookup(&[("PICTO_LINGUA_TIMEOUT_SECS", "0")]));
        assert!(matches!(err, Err(ConfigError::InvalidTimeout { .. })));
    }
}
