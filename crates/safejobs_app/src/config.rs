use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use safejobs_core::DEFAULT_MAX_ATTEMPTS;
use safejobs_engine::{EngineConfig, ExportOptions, SearchSettings};

use crate::logging::LogDestination;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Zero means keep prompting forever.
    pub max_attempts: u32,
    pub log_destination: LogDestination,
}

impl AppConfig {
    /// Load configuration from the environment, after sourcing `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut engine = EngineConfig::default();
        let defaults = SearchSettings::default();
        engine.search = SearchSettings {
            endpoint: var("JOB_SEARCH_URL").unwrap_or(defaults.endpoint),
            api_key: var("JOB_API_KEY"),
            user_agent: var("JOB_API_USER_AGENT").unwrap_or(defaults.user_agent),
        };
        if let Some(url) = var("SAFE_STATES_URL") {
            engine.safe_states_url = url;
        }
        if let Some(dir) = var("SAFEJOBS_OUTPUT_DIR") {
            engine.export = ExportOptions {
                output_dir: PathBuf::from(dir),
                ..ExportOptions::default()
            };
        }

        let max_attempts = match var("SAFEJOBS_MAX_ATTEMPTS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("SAFEJOBS_MAX_ATTEMPTS must be a number, got '{raw}'"))?,
            None => DEFAULT_MAX_ATTEMPTS,
        };

        let log_destination = match var("SAFEJOBS_LOG") {
            Some(raw) => LogDestination::parse(&raw)
                .with_context(|| format!("SAFEJOBS_LOG must be file, terminal or both, got '{raw}'"))?,
            None => LogDestination::default(),
        };

        Ok(Self {
            engine,
            max_attempts,
            log_destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use safejobs_engine::{DEFAULT_CSV_FILENAME, DEFAULT_SAFE_STATES_URL, DEFAULT_SEARCH_ENDPOINT};

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.engine.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.engine.search.api_key, None);
        assert_eq!(config.engine.safe_states_url, DEFAULT_SAFE_STATES_URL);
        assert_eq!(config.engine.export.filename, DEFAULT_CSV_FILENAME);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.log_destination, LogDestination::File);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("JOB_API_KEY", "abc"),
            ("JOB_API_USER_AGENT", "me@example.com"),
            ("SAFEJOBS_OUTPUT_DIR", "/tmp/out"),
            ("SAFEJOBS_MAX_ATTEMPTS", " 0 "),
            ("SAFEJOBS_LOG", "Both"),
        ])
        .unwrap();
        assert_eq!(config.engine.search.api_key.as_deref(), Some("abc"));
        assert_eq!(config.engine.search.user_agent, "me@example.com");
        assert_eq!(config.engine.export.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.max_attempts, 0);
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = config_from(&[("JOB_API_KEY", "   ")]).unwrap();
        assert_eq!(config.engine.search.api_key, None);
    }

    #[test]
    fn rejects_bad_numbers_and_destinations() {
        assert!(config_from(&[("SAFEJOBS_MAX_ATTEMPTS", "many")]).is_err());
        assert!(config_from(&[("SAFEJOBS_LOG", "syslog")]).is_err());
    }
}
