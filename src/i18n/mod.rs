// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) configuration for the application.
//!
//! This module builds the locale configuration handed to the localization
//! plugin at assembly time: which locale is active, which locale to fall back
//! to, and the message catalogs for every shipped locale. Catalogs are
//! compiled-in static data; resolving a missing translation at runtime is the
//! localization subsystem's concern, not this module's.

pub mod catalog;

pub use catalog::{embedded_catalogs, MessageCatalog};

use std::collections::BTreeMap;
use unic_langid::LanguageIdentifier;

/// The value object consumed by the localization plugin: an active locale,
/// a fallback locale, and the per-locale message catalogs.
///
/// Construction is pure and infallible. The chosen locales are not required
/// to appear in `catalogs` — an absent catalog is a fallback opportunity for
/// the localization subsystem, not a configuration error.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleConfig {
    locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
    catalogs: BTreeMap<LanguageIdentifier, MessageCatalog>,
}

impl LocaleConfig {
    pub fn new(
        locale: LanguageIdentifier,
        fallback_locale: LanguageIdentifier,
        catalogs: BTreeMap<LanguageIdentifier, MessageCatalog>,
    ) -> Self {
        Self {
            locale,
            fallback_locale,
            catalogs,
        }
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    pub fn catalogs(&self) -> &BTreeMap<LanguageIdentifier, MessageCatalog> {
        &self.catalogs
    }

    pub fn catalog(&self, locale: &LanguageIdentifier) -> Option<&MessageCatalog> {
        self.catalogs.get(locale)
    }
}
