//! Supported translation languages.

use std::fmt;

/// A supported language: ISO 639-1 code, English name and native name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// Sorted by code.
const SUPPORTED: &[Language] = &[
    lang("af", "Afrikaans", "Afrikaans"),
    lang("ar", "Arabic", "العربية"),
    lang("bg", "Bulgarian", "Български"),
    lang("bn", "Bengali", "বাংলা"),
    lang("ca", "Catalan", "Català"),
    lang("cs", "Czech", "Čeština"),
    lang("da", "Danish", "Dansk"),
    lang("de", "German", "Deutsch"),
    lang("el", "Greek", "Ελληνικά"),
    lang("en", "English", "English"),
    lang("es", "Spanish", "Español"),
    lang("et", "Estonian", "Eesti"),
    lang("fa", "Persian", "فارسی"),
    lang("fi", "Finnish", "Suomi"),
    lang("fr", "French", "Français"),
    lang("he", "Hebrew", "עברית"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("hr", "Croatian", "Hrvatski"),
    lang("hu", "Hungarian", "Magyar"),
    lang("id", "Indonesian", "Bahasa Indonesia"),
    lang("it", "Italian", "Italiano"),
    lang("ja", "Japanese", "日本語"),
    lang("ko", "Korean", "한국어"),
    lang("lt", "Lithuanian", "Lietuvių"),
    lang("lv", "Latvian", "Latviešu"),
    lang("ms", "Malay", "Bahasa Melayu"),
    lang("nl", "Dutch", "Nederlands"),
    lang("no", "Norwegian", "Norsk"),
    lang("pl", "Polish", "Polski"),
    lang("pt", "Portuguese", "Português"),
    lang("ro", "Romanian", "Română"),
    lang("ru", "Russian", "Русский"),
    lang("sk", "Slovak", "Slovenčina"),
    lang("sl", "Slovenian", "Slovenščina"),
    lang("sr", "Serbian", "Српски"),
    lang("sv", "Swedish", "Svenska"),
    lang("th", "Thai", "ไทย"),
    lang("tr", "Turkish", "Türkçe"),
    lang("uk", "Ukrainian", "Українська"),
    lang("vi", "Vietnamese", "Tiếng Việt"),
    lang("zh", "Chinese", "中文"),
];

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> Language {
    Language {
        code,
        name,
        native_name,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?} (use --list-languages to see supported codes)")]
pub struct UnsupportedLanguage(pub String);

/// Looks up a supported language by code.
pub fn find(code: &str) -> Option<&'static Language> {
    SUPPORTED
        .binary_search_by(|l| l.code.cmp(code))
        .ok()
        .map(|i| &SUPPORTED[i])
}

pub fn validate(code: &str) -> Result<&'static Language, UnsupportedLanguage> {
    find(code).ok_or_else(|| UnsupportedLanguage(code.to_string()))
}

/// English name for `code`, or the code itself when unknown.
pub fn name(code: &str) -> &str {
    find(code).map_or(code, |l| l.name)
}

/// Native name for `code`, or the code itself when unknown.
pub fn native_name(code: &str) -> &str {
    find(code).map_or(code, |l| l.native_name)
}

/// All supported languages, sorted by code.
pub fn supported() -> &'static [Language] {
    SUPPORTED
}

/// A source and target language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn is_same(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", name(&self.source), name(&self.target))
    }
}
