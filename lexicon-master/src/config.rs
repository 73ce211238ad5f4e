use std::env;
use std::time::Duration;

use dictionary::gemini::{GeminiConfig, DEFAULT_API_URL, DEFAULT_MODEL};

use crate::error::ConfigError;
use crate::logging::LogFormat;
use crate::storage::DEFAULT_DB_URL;

pub struct Config {
    pub gemini: GeminiConfig,
    pub database_url: String,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let timeout = match lookup("LEXICON_REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let seconds = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    name: "LEXICON_REQUEST_TIMEOUT_SECS",
                    value: value.clone(),
                    reason: "expected whole seconds".to_string(),
                })?;
                Some(Duration::from_secs(seconds))
            }
            None => None,
        };

        let log_format = match lookup("LEXICON_LOG_FORMAT") {
            Some(value) => value.parse().map_err(|reason| ConfigError::InvalidValue {
                name: "LEXICON_LOG_FORMAT",
                value: value.clone(),
                reason,
            })?,
            None => LogFormat::Text,
        };

        Ok(Config {
            gemini: GeminiConfig {
                api_key,
                model: lookup("LEXICON_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_url: lookup("LEXICON_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                timeout,
            },
            database_url: lookup("LEXICON_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DB_URL.to_string()),
            log_format,
            log_level: lookup("LEXICON_LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_with_only_an_api_key() {
        let config = config_from(&[("GEMINI_API_KEY", "secret")]).unwrap();
        assert_eq!(config.gemini.api_key, "secret");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout, None);
        assert_eq!(config.database_url, "sqlite://lexicon.db");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn api_key_falls_back_to_generic_name() {
        let config = config_from(&[("API_KEY", "fallback")]).unwrap();
        assert_eq!(config.gemini.api_key, "fallback");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        assert!(matches!(config_from(&[]), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            config_from(&[("GEMINI_API_KEY", "  ")]),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("LEXICON_MODEL", "gemini-2.5-pro"),
            ("LEXICON_REQUEST_TIMEOUT_SECS", "45"),
            ("LEXICON_DATABASE_URL", "sqlite://words.db"),
            ("LEXICON_LOG_FORMAT", "json"),
            ("LEXICON_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.database_url, "sqlite://words.db");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let result = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("LEXICON_REQUEST_TIMEOUT_SECS", "soon"),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "LEXICON_REQUEST_TIMEOUT_SECS",
                ..
            })
        ));
    }
}
