use std::env;

use evently_core::auth::{OrganizerId, LEGACY_ORGANIZER_ID};
use evently_core::event::Locale;
use uuid::Uuid;

use crate::client::DEFAULT_BASE_URL;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL (default: "http://localhost:3000")
    pub base_url: String,
    /// Message locale (default: pt-BR)
    pub locale: Locale,
    /// Organizer id used when nobody is signed in
    pub fallback_organizer: OrganizerId,
    /// Signed-in user, if any
    pub session_user: Option<Uuid>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTLY_URL` - API base URL (default: "http://localhost:3000")
    /// - `EVENTLY_LOCALE` - `pt-BR` or `en` (default: `pt-BR`)
    /// - `EVENTLY_ORGANIZER_ID` - fallback organizer id (default: legacy placeholder)
    /// - `EVENTLY_SESSION_USER` - signed-in user id (default: none)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, such as a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("EVENTLY_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            locale: lookup("EVENTLY_LOCALE")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            fallback_organizer: lookup("EVENTLY_ORGANIZER_ID")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(legacy_organizer),
            session_user: lookup("EVENTLY_SESSION_USER")
                .and_then(|v| Uuid::parse_str(v.trim()).ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The legacy placeholder organizer.
pub fn legacy_organizer() -> OrganizerId {
    Uuid::parse_str(LEGACY_ORGANIZER_ID)
        .map(OrganizerId::new)
        .unwrap_or_else(|_| OrganizerId::new(Uuid::nil()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_legacy_organizer() {
        assert_eq!(legacy_organizer().to_string(), LEGACY_ORGANIZER_ID);
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.fallback_organizer, legacy_organizer());
        assert_eq!(config.session_user, None);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("EVENTLY_URL", "http://api.example.com"),
            ("EVENTLY_LOCALE", "en"),
            ("EVENTLY_ORGANIZER_ID", "0f0e0d0c-0b0a-4908-8706-050403020100"),
            ("EVENTLY_SESSION_USER", "not-a-uuid"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://api.example.com");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(
            config.fallback_organizer.to_string(),
            "0f0e0d0c-0b0a-4908-8706-050403020100"
        );
        assert_eq!(config.session_user, None);
    }
}
