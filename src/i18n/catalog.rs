use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Flat mapping from message key to localized string for one locale.
/// Immutable once handed to the locale configuration; any runtime mutation
/// belongs to the localization subsystem after handoff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one embedded locale file: a flat TOML table of
    /// `key = "localized string"` pairs.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let messages: BTreeMap<String, String> =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self { messages })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// Loads every catalog shipped inside the binary. The file stem is the
/// locale identifier (`en.toml`, `cn.toml`); files that do not parse as a
/// locale identifier are skipped.
pub fn embedded_catalogs() -> BTreeMap<LanguageIdentifier, MessageCatalog> {
    let mut catalogs = BTreeMap::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".toml") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Some(content) = Asset::get(filename) {
                    let catalog = MessageCatalog::from_toml_str(&String::from_utf8_lossy(
                        content.data.as_ref(),
                    ))
                    .expect("Failed to parse embedded locale file.");
                    catalogs.insert(locale, catalog);
                }
            }
        }
    }

    catalogs
}
