//! Configuration types for Solomon
//!
//! Defines the `Settings` tree loaded from `~/.config/solomon/config.toml`.
//! Every section and field is individually defaulted, so a partial file
//! (or none at all) always produces a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub persona: PersonaSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Remote document store connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Base URL of the document store
    #[serde(default = "default_store_url")]
    pub base_url: String,

    /// Collection both documents live under
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Optional bearer token attached to every store request
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: default_store_url(),
            collection: default_collection(),
            bearer_token: None,
        }
    }
}

fn default_store_url() -> String {
    "http://localhost:8087".to_string()
}

fn default_collection() -> String {
    "solomon".to_string()
}

/// Text-generation endpoint for the future-self persona
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonaSettings {
    /// Generation endpoint URL
    #[serde(default = "default_persona_endpoint")]
    pub endpoint: String,

    /// Model name sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Override of the built-in persona framing text
    #[serde(default)]
    pub persona: Option<String>,
}

impl Default for PersonaSettings {
    fn default() -> Self {
        Self {
            endpoint: default_persona_endpoint(),
            model: default_model(),
            persona: None,
        }
    }
}

fn default_persona_endpoint() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Terminal width (columns) below which the layout collapses to a
    /// single pane
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            compact_width: default_compact_width(),
        }
    }
}

fn default_compact_width() -> u16 {
    90
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Milliseconds a chat snapshot sits in the persistence queue before it
    /// is written; a burst of edits becomes one write
    #[serde(default = "default_save_debounce_ms")]
    pub save_debounce_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            save_debounce_ms: default_save_debounce_ms(),
        }
    }
}

fn default_save_debounce_ms() -> u64 {
    400
}

impl BehaviorSettings {
    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.store.base_url, "http://localhost:8087");
        assert_eq!(settings.store.collection, "solomon");
        assert!(settings.store.bearer_token.is_none());
        assert_eq!(settings.persona.model, "llama3.2");
        assert_eq!(settings.ui.compact_width, 90);
        assert_eq!(settings.behavior.save_debounce(), Duration::from_millis(400));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            compact_width = 120
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.compact_width, 120);
        assert_eq!(settings.store.base_url, "http://localhost:8087");
        assert_eq!(settings.behavior.save_debounce_ms, 400);
    }

    #[test]
    fn test_full_round_trip() {
        let mut settings = Settings::default();
        settings.store.bearer_token = Some("sekrit".to_string());
        settings.persona.persona = Some("You are a patient mentor.".to_string());

        let encoded = toml::to_string_pretty(&settings).unwrap();
        let decoded: Settings = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.store.bearer_token.as_deref(), Some("sekrit"));
        assert_eq!(
            decoded.persona.persona.as_deref(),
            Some("You are a patient mentor.")
        );
    }
}
