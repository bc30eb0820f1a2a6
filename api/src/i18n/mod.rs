//! Localized client messages
//!
//! The catalog is embedded from `i18n/messages.toml` at compile time. Each
//! key maps to an English and a Russian template; `{name}` placeholders are
//! filled in by [`format_message`].

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use sd_shared::types::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub en: String,
    pub ru: String,
}

impl Translation {
    fn get(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.en,
            Language::Russian => &self.ru,
        }
    }
}

pub static MESSAGES: Lazy<HashMap<String, Translation>> = Lazy::new(|| {
    load_messages().unwrap_or_else(|e| {
        log::error!("Failed to parse embedded message catalog: {}", e);
        HashMap::new()
    })
});

fn load_messages() -> Result<HashMap<String, Translation>, toml::de::Error> {
    toml::from_str(include_str!("../../i18n/messages.toml"))
}

/// Look up a message template; unknown keys render as the key itself
pub fn message(key: &str, lang: Language) -> String {
    MESSAGES
        .get(key)
        .map(|t| t.get(lang).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Look up a template and substitute its placeholders
pub fn message_with(key: &str, lang: Language, params: &[(&str, &str)]) -> String {
    format_message(&message(key, lang), params)
}

pub fn format_message(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert!(load_messages().is_ok());
        assert!(MESSAGES.len() >= 20);
    }

    #[test]
    fn test_every_entry_translated() {
        for (key, translation) in MESSAGES.iter() {
            assert!(!translation.en.is_empty(), "missing en for {}", key);
            assert!(!translation.ru.is_empty(), "missing ru for {}", key);
        }
    }

    #[test]
    fn test_message_lookup() {
        assert_eq!(message("user_not_found", Language::English), "user not found");
        assert_eq!(message("user_not_found", Language::Russian), "пользователь не найден");
        assert_eq!(message("no_such_key", Language::English), "no_such_key");
    }

    #[test]
    fn test_format_message() {
        let text = message_with(
            "field_min",
            Language::English,
            &[("field", "name"), ("param", "2")],
        );
        assert_eq!(text, "field 'name' must contain at least 2 characters");
    }
}
