//! Authoring configuration loaded from the environment.
//!
//! Supported environment variables:
//! - `STORAGE_PUBLIC_BASE_URL`: base URL of the storage service (default `http://localhost:54321`)
//! - `MEDIA_BUCKET`: bucket holding uploaded audio (default `audio`)
//! - `DEFAULT_LANGUAGE`: language for slides that name none (default `en`)
//! - `ORPHAN_POLICY`: `silent` or `warn` (default `silent`)

use std::fmt;
use std::str::FromStr;

use lessonbldr_domain::{normalize_language, EditingContext};

pub const DEFAULT_STORAGE_PUBLIC_BASE_URL: &str = "http://localhost:54321";
pub const DEFAULT_MEDIA_BUCKET: &str = "audio";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ORPHAN_POLICY value '{0}' (expected 'silent' or 'warn')")]
    InvalidOrphanPolicy(String),
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

/// What to do with rows the hierarchy builder could not place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Drop them without a trace
    #[default]
    Silent,
    /// Log one warning per orphan
    Warn,
}

impl fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => write!(f, "silent"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for OrphanPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "warn" => Ok(Self::Warn),
            _ => Err(ConfigError::InvalidOrphanPolicy(s.to_string())),
        }
    }
}

/// Settings shared by the authoring use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringConfig {
    pub storage_public_base_url: String,
    pub media_bucket: String,
    /// Normalized language code
    pub default_language: String,
    pub orphan_policy: OrphanPolicy,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            storage_public_base_url: DEFAULT_STORAGE_PUBLIC_BASE_URL.to_string(),
            media_bucket: DEFAULT_MEDIA_BUCKET.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            orphan_policy: OrphanPolicy::Silent,
        }
    }
}

impl AuthoringConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = read("STORAGE_PUBLIC_BASE_URL") {
            config.storage_public_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(bucket) = read("MEDIA_BUCKET") {
            config.media_bucket = bucket.trim_matches('/').to_string();
            if config.media_bucket.is_empty() {
                return Err(ConfigError::Blank("MEDIA_BUCKET"));
            }
        }
        if let Some(lang) = read("DEFAULT_LANGUAGE") {
            config.default_language =
                normalize_language(&lang).ok_or(ConfigError::Blank("DEFAULT_LANGUAGE"))?;
        }
        if let Some(policy) = read("ORPHAN_POLICY") {
            config.orphan_policy = policy.parse()?;
        }
        Ok(config)
    }

    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    pub fn editing_context(&self) -> EditingContext {
        EditingContext::new(&self.media_bucket, &self.default_language)
    }
}
