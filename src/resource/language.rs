use std::collections::HashSet;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

lazy_static::lazy_static! {
    /// Language codes accepted for message templates.
    static ref AVAILABLE_LANGUAGES: HashSet<&'static str> = [
        "af", "sq", "ar", "az", "bn", "bg", "ca", "zh_CN", "zh_HK", "zh_TW", "hr", "cs", "da",
        "nl", "en", "en_GB", "en_US", "et", "fil", "fi", "fr", "ka", "de", "el", "gu", "ha",
        "he", "hi", "hu", "id", "ga", "it", "ja", "kn", "kk", "rw_RW", "ko", "ky_KG", "lo",
        "lv", "lt", "mk", "ms", "ml", "mr", "nb", "fa", "pl", "pt_BR", "pt_PT", "pa", "ro",
        "ru", "sr", "sk", "sl", "es", "es_AR", "es_ES", "es_MX", "sw", "sv", "ta", "te", "th",
        "tr", "uk", "ur", "uz", "vi", "zu",
    ]
    .into_iter()
    .collect();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported template language: {0}")]
    Unsupported(String),
}

/// Validated template language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Result<Self, LanguageError> {
        let code = code.into();
        if Self::is_available(&code) {
            Ok(Self(code))
        } else {
            Err(LanguageError::Unsupported(code))
        }
    }

    pub fn is_available(code: &str) -> bool {
        AVAILABLE_LANGUAGES.contains(code)
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "code": self.0 })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Language", 1)?;
        state.serialize_field("code", &self.0)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        for code in ["en", "en_US", "pt_BR", "zh_CN", "fil", "zu"] {
            assert!(Language::is_available(code), "{code} should be available");
        }
        assert_eq!(Language::new("es_MX").unwrap().code(), "es_MX");
    }

    #[test]
    fn test_unknown_language() {
        assert!(!Language::is_available("en-US"));
        assert_eq!(
            Language::new("klingon"),
            Err(LanguageError::Unsupported("klingon".into()))
        );
    }

    #[test]
    fn test_serializes_as_code_object() {
        let language = Language::new("en_US").unwrap();
        assert_eq!(serde_json::to_string(&language).unwrap(), r#"{"code":"en_US"}"#);
    }
}
