//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Translation request
///
/// Built once per invocation from caller-supplied content and discarded
/// after the call completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
    pub debug: bool,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang: target_lang.into(),
            debug: false,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// A single completed translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// Translated text, verbatim from the remote service
    pub text: String,
    /// Source language reported by the remote service, if any
    pub detected_source_language: Option<String>,
}
