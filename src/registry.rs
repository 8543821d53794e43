//! Registry of valid ISO language codes.

use crate::model::FALLBACK_ISO;

/// Built-in registry used when the config file does not override it.
/// The fallback language comes first; the rest are alphabetical.
pub const DEFAULT_ISO_CODES: &[&str] = &[
    FALLBACK_ISO,
    "ar",
    "de",
    "es",
    "fr",
    "hi",
    "it",
    "ja",
    "ko",
    "nl",
    "pl",
    "pt",
    "ru",
    "sw",
    "tr",
    "zh",
];

/// An ordered set of allowed ISO codes.
///
/// Order is insertion order; duplicates keep their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoRegistry {
    codes: Vec<String>,
}

impl IsoRegistry {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: Vec<String> = Vec::new();
        for code in codes {
            let code = code.into();
            if !seen.contains(&code) {
                seen.push(code);
            }
        }
        Self { codes: seen }
    }

    pub fn contains(&self, iso: &str) -> bool {
        self.codes.iter().any(|code| code == iso)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for IsoRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ISO_CODES.iter().copied())
    }
}
