//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a stored language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Connection form
    HostLabel,
    PortLabel,
    UserLabel,
    PasswordLabel,
    Connect,

    // Connection status
    StatusDisconnected,
    StatusConnecting,
    StatusConnected,
    StatusFailed,

    // Corpora list
    AvailableCorpora,
    NoCorpora,
    AnnotationTypes,

    // Audio lookup
    FindAudio,
    SelectCorpus,
    Searching,
    AudioFound,
    SelectAudioDirectory,
    AudioScanIncomplete,
    AudioScanFailed,

    // Cache
    ResetCache,
    CacheResetDone,

    // Dialogs
    InvalidInformation,
    InvalidHost,
    InvalidPort,
    ConnectFailed,
    OperationFailed,
    Ok,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::HostLabel,
        Key::PortLabel,
        Key::UserLabel,
        Key::PasswordLabel,
        Key::Connect,
        Key::StatusDisconnected,
        Key::StatusConnecting,
        Key::StatusConnected,
        Key::StatusFailed,
        Key::AvailableCorpora,
        Key::NoCorpora,
        Key::AnnotationTypes,
        Key::FindAudio,
        Key::SelectCorpus,
        Key::Searching,
        Key::AudioFound,
        Key::SelectAudioDirectory,
        Key::AudioScanIncomplete,
        Key::AudioScanFailed,
        Key::ResetCache,
        Key::CacheResetDone,
        Key::InvalidInformation,
        Key::InvalidHost,
        Key::InvalidPort,
        Key::ConnectFailed,
        Key::OperationFailed,
        Key::Ok,
    ];

    #[test]
    fn every_key_is_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in ALL_KEYS {
                assert_ne!(t(lang, *key), "???", "{:?} missing in {:?}", key, lang);
            }
        }
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code(Language::Chinese.code()), Language::Chinese);
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
