//! Language types for localized error messages

use serde::{Deserialize, Serialize};

/// Language used when rendering error messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Pick a language from an Accept-Language header.
    ///
    /// Only the first (highest priority) entry is considered; anything that
    /// is not Russian falls back to English.
    pub fn from_accept_language(header: &str) -> Self {
        let primary = header
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if primary.starts_with("ru") {
            Language::Russian
        } else {
            Language::English
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ru" | "rus" | "russian" => Ok(Language::Russian),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_header() {
        assert_eq!(Language::from_accept_language("en-US,en;q=0.9"), Language::English);
        assert_eq!(Language::from_accept_language("ru-RU,ru;q=0.9"), Language::Russian);
        assert_eq!(Language::from_accept_language("RU"), Language::Russian);
        assert_eq!(Language::from_accept_language("fr-FR,ru;q=0.5"), Language::English);
        assert_eq!(Language::from_accept_language(""), Language::English);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!("zh".parse::<Language>().is_err());
    }
}
