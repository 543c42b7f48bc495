//! Conversational actions exposed by the plugin

pub mod translate;
