//! Plugin descriptor wiring the client into the host-facing action set

use crate::actions::translate::TranslateAction;
use crate::core::client::DeeplClient;
use crate::core::config::SettingsSource;
use crate::core::errors::Result;

/// Plugin name registered with the host runtime
pub const PLUGIN_NAME: &str = "deeplPro";

/// Plugin description registered with the host runtime
pub const PLUGIN_DESCRIPTION: &str =
    "DeepL Pro Plugin - Enables text translation using the DeepL API";

/// The DeepL plugin: a resolved credential plus the translate action
///
/// Construction fails fast when the credential is missing, before any
/// request is attempted.
#[derive(Debug, Clone)]
pub struct DeeplPlugin {
    pub translate: TranslateAction,
}

impl DeeplPlugin {
    /// Build the plugin from a host settings source
    pub fn from_settings(settings: &dyn SettingsSource) -> Result<Self> {
        let client = DeeplClient::from_settings(settings)?;
        Ok(Self {
            translate: TranslateAction::new(client),
        })
    }
}
