//! DeepL Plugin - Text translation for conversational agents
//!
//! This library lets an agent runtime invoke the DeepL translation API and
//! report the translated text back through a callback-based action interface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod actions;
pub mod core;
pub mod plugin;

// Re-export key types for convenience
pub use crate::core::{
    client::DeeplClient,
    config::{DeeplConfig, EnvSettings, SettingsSource, DEEPL_AUTH_KEY},
    errors::TranslationError,
    models::{Translation, TranslationRequest},
};

pub use crate::actions::translate::{is_valid_content, HandlerPayload, Message, TranslateAction};
pub use crate::plugin::DeeplPlugin;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
