//! Frontend configuration module
//!
//! This module provides configuration for the API endpoint, the session
//! storage key and logging.

use log::Level;

/// Local storage key under which the logged-in user is kept.
pub const SESSION_STORAGE_KEY: &str = "loggedLibraryUser";

const DEFAULT_API_BASE_URL: &str = "/api";

/// Frontend configuration, resolved at compile time.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the backend API
    pub api_base_url: String,
    /// Local storage key for the persisted session
    pub session_storage_key: String,
    /// Maximum level forwarded to the browser console
    pub log_level: Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("BOOKSHELF_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            session_storage_key: SESSION_STORAGE_KEY.to_string(),
            log_level: parse_level(option_env!("BOOKSHELF_LOG_LEVEL")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn session_storage_key(&self) -> &str {
        &self.session_storage_key
    }
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url().is_empty());
        assert_eq!(config.session_storage_key(), "loggedLibraryUser");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), Level::Info);
        assert_eq!(parse_level(Some("debug")), Level::Debug);
        assert_eq!(parse_level(Some(" WARN ")), Level::Warn);
        assert_eq!(parse_level(Some("verbose")), Level::Info);
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
