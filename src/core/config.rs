//! Configuration management and credential resolution

use std::fmt;

use tracing::info;

use crate::core::errors::{Result, TranslationError};

/// Settings key holding the DeepL API credential
pub const DEEPL_AUTH_KEY: &str = "DEEPL_AUTH_KEY";

/// Fixed DeepL translate endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.deepl.com/v2/translate";

/// Host-provided settings lookup
///
/// The agent runtime owns the settings store; the plugin only ever asks it
/// for single keys by name.
pub trait SettingsSource {
    /// Look up a setting by key, `None` when unset
    fn get_setting(&self, key: &str) -> Option<String>;
}

impl<F> SettingsSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get_setting(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Settings source backed by process environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingsSource for EnvSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Configuration for the DeepL client
#[derive(Clone)]
pub struct DeeplConfig {
    pub api_key: String,
    pub api_endpoint: String,
}

// The credential must never leak through logs
impl fmt::Debug for DeeplConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeeplConfig")
            .field("api_key", &"***")
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

impl DeeplConfig {
    /// Resolve the credential from a settings source
    ///
    /// Fails fast when `DEEPL_AUTH_KEY` is absent or empty. Idempotent:
    /// calling again simply re-reads the key.
    pub fn resolve(settings: &dyn SettingsSource) -> Result<Self> {
        let api_key = settings
            .get_setting(DEEPL_AUTH_KEY)
            .unwrap_or_default();

        if api_key.is_empty() {
            return Err(TranslationError::ConfigError {
                message: format!("{} not set in runtime.", DEEPL_AUTH_KEY),
            });
        }

        info!("Resolved DeepL credential");

        Ok(Self {
            api_key,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        })
    }

    /// Resolve from environment variables
    pub fn from_env() -> Result<Self> {
        Self::resolve(&EnvSettings)
    }

    /// Override the endpoint, mainly for tests against a local server
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.api_endpoint.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        Ok(())
    }
}
