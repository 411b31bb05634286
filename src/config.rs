use std::path::PathBuf;

use anyhow::Result;
use ::config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SESSION_FILE: &str = ".ucu-session.json";

/// Client configuration, read from `UCU_*` environment variables (and `.env`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Backend origin; endpoint paths are appended verbatim.
    pub api_base_url: String,
    /// File the session token and user are persisted in.
    pub session_file: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_source(Environment::with_prefix("UCU"))
    }

    fn from_source(environment: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("session_file", DEFAULT_SESSION_FILE)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, api_base_url: Option<String>, session_file: Option<PathBuf>) -> Self {
        if let Some(api_base_url) = api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(session_file) = session_file {
            self.session_file = session_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("UCU").source(Some(source))
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::from_source(environment(&[])).unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:5000");
        assert_eq!(settings.session_file, PathBuf::from(".ucu-session.json"));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = Settings::from_source(environment(&[
            ("UCU_API_BASE_URL", "https://analytics.example.edu"),
            ("UCU_SESSION_FILE", "/tmp/session.json"),
        ]))
        .unwrap();
        assert_eq!(settings.api_base_url, "https://analytics.example.edu");
        assert_eq!(settings.session_file, PathBuf::from("/tmp/session.json"));
    }

    #[test]
    fn test_flags_win_over_loaded_values() {
        let settings = Settings::from_source(environment(&[("UCU_API_BASE_URL", "http://env:1")]))
            .unwrap()
            .with_overrides(Some("http://flag:2".to_string()), None);
        assert_eq!(settings.api_base_url, "http://flag:2");
        assert_eq!(settings.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
    }
}
