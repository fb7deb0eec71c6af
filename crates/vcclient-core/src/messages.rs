//! Localized label registry.
//!
//! Components register their labels once, keyed by component id and label
//! key, with one text per language. Lookups resolve against the active
//! language and fall back to the primary subtag, then English, then the key.

use std::collections::HashMap;

pub const FALLBACK_LANG: &str = "en";

#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    lang: String,
    messages: HashMap<String, HashMap<String, HashMap<String, String>>>,
}

impl MessageBuilder {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            messages: HashMap::new(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    pub fn set_message(&mut self, component: &str, key: &str, texts: &[(&str, &str)]) {
        let entry = self
            .messages
            .entry(component.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default();
        for (lang, text) in texts {
            entry.insert(lang.to_string(), text.to_string());
        }
    }

    pub fn is_registered(&self, component: &str) -> bool {
        self.messages.contains_key(component)
    }

    pub fn get_message(&self, component: &str, key: &str) -> String {
        let Some(texts) = self.messages.get(component).and_then(|c| c.get(key)) else {
            tracing::warn!("No message registered for {}::{}", component, key);
            return key.to_string();
        };

        let primary = self.lang.split(['-', '_']).next().unwrap_or_default();
        [self.lang.as_str(), primary, FALLBACK_LANG]
            .iter()
            .find_map(|lang| texts.get(*lang))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
