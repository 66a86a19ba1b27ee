use std::env;
use std::time::Duration;
use strum::{AsRefStr, EnumString};

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base URL of the notes collection, e.g. "http://localhost:3001/api/notes"
    pub const API_URL: &str = "NOTES_API_URL";
    /// Seconds an error notice stays visible before it clears itself
    pub const NOTICE_SECS: &str = "NOTES_NOTICE_SECS";
    pub const REQUEST_TIMEOUT_SECS: &str = "NOTES_REQUEST_TIMEOUT_SECS";
    /// "random", "important" or "normal"
    pub const IMPORTANCE: &str = "NOTES_IMPORTANCE";
}

/// Default values
pub mod defaults {
    pub const API_URL: &str = "http://localhost:3001/api/notes";
    pub const NOTICE_SECS: u64 = 5;
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// How the importance flag of a freshly added note is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImportancePolicy {
    /// Coin flip
    #[default]
    Random,
    Important,
    Normal,
}

impl ImportancePolicy {
    pub fn pick(&self) -> bool {
        match self {
            Self::Random => rand::random::<bool>(),
            Self::Important => true,
            Self::Normal => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub notice_duration: Duration,
    pub request_timeout: Duration,
    pub importance: ImportancePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: defaults::API_URL.to_string(),
            notice_duration: Duration::from_secs(defaults::NOTICE_SECS),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            importance: ImportancePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(env_vars::API_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| defaults::API_URL.to_string());

        let notice_secs = parse_or_default(
            env_vars::NOTICE_SECS,
            lookup(env_vars::NOTICE_SECS),
            defaults::NOTICE_SECS,
        );
        let timeout_secs = parse_or_default(
            env_vars::REQUEST_TIMEOUT_SECS,
            lookup(env_vars::REQUEST_TIMEOUT_SECS),
            defaults::REQUEST_TIMEOUT_SECS,
        );

        let importance = match lookup(env_vars::IMPORTANCE) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "[NOTES] Invalid {}={:?}, using {}",
                    env_vars::IMPORTANCE,
                    raw,
                    ImportancePolicy::default().as_ref()
                );
                ImportancePolicy::default()
            }),
            None => ImportancePolicy::default(),
        };

        Self {
            api_url,
            notice_duration: Duration::from_secs(notice_secs),
            request_timeout: Duration::from_secs(timeout_secs),
            importance,
        }
    }
}

fn parse_or_default(key: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("[NOTES] Invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
