use std::cell::RefCell;

use common::KeyValueStore;
use log::Level;
use web_sys::window;

use crate::storage::LocalStorage;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const API_BASE_URL_KEY: &str = "ucu_api_base_url";
const LOG_LEVEL_KEY: &str = "ucu_log_level";

/// Browser-side configuration, overridable through local storage.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend origin; endpoint paths (all starting with `/api`) are appended.
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
        }
    }
}

impl AppSettings {
    /// Settings for the current page: overrides from `localStorage`, debug
    /// logging when served from the local machine.
    pub fn from_environment() -> Self {
        let local_host = window()
            .and_then(|w| w.location().hostname().ok())
            .is_some_and(|host| host == "localhost" || host == "127.0.0.1");
        Self::from_store(&LocalStorage, local_host)
    }

    pub fn from_store(store: &impl KeyValueStore, local_host: bool) -> Self {
        let mut settings = Self::default();
        if local_host {
            settings.log_level = Level::Debug;
        }

        if let Some(url) = store.get(API_BASE_URL_KEY).filter(|url| !url.trim().is_empty()) {
            settings.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = store.get(LOG_LEVEL_KEY).and_then(|l| l.parse::<Level>().ok()) {
            settings.log_level = level;
        }

        settings
    }

    /// Absolute URL of a backend endpoint path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Read the settings once at startup.
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MemoryStore;

    #[test]
    fn defaults_point_at_local_backend() {
        let settings = AppSettings::from_store(&MemoryStore::new(), false);
        assert_eq!(settings.api_url("/api/login"), "http://localhost:5000/api/login");
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn stored_overrides_win() {
        let store = MemoryStore::new();
        store.set(API_BASE_URL_KEY, "https://analytics.ucu.ac.ug/").unwrap();
        store.set(LOG_LEVEL_KEY, "warn").unwrap();

        let settings = AppSettings::from_store(&store, true);
        assert_eq!(settings.api_url("/api/report/generate"), "https://analytics.ucu.ac.ug/api/report/generate");
        assert_eq!(settings.log_level, Level::Warn);
    }

    #[test]
    fn local_host_logs_at_debug_unless_overridden() {
        let store = MemoryStore::new();
        store.set(LOG_LEVEL_KEY, "verbose").unwrap();
        assert_eq!(AppSettings::from_store(&store, true).log_level, Level::Debug);
    }
}
