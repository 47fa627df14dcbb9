// SPDX-License-Identifier: MPL-2.0
use super::Plugin;
use crate::app::AppInstance;
use crate::error::InstallError;
use crate::i18n::LocaleConfig;
use unic_langid::LanguageIdentifier;

const NAME: &str = "localization";

/// Installs the localization runtime, configured with the locale
/// configuration built at startup. Installed first so every later plugin can
/// already translate strings at first render.
pub struct LocalizationPlugin {
    config: LocaleConfig,
}

impl LocalizationPlugin {
    pub fn new(config: LocaleConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LocalizationPlugin {
    fn name(&self) -> &'static str {
        NAME
    }

    fn install(&self, app: &mut AppInstance) -> Result<(), InstallError> {
        if self.config.catalogs().is_empty() {
            return Err(InstallError::new(
                NAME,
                "locale configuration carries no message catalogs",
            ));
        }
        app.insert_extension(Localization::new(self.config.clone()));
        Ok(())
    }
}

/// The installed capability: key lookup against the active locale's catalog,
/// falling back to the fallback locale's catalog for absent keys or an
/// absent catalog.
pub struct Localization {
    config: LocaleConfig,
}

impl Localization {
    fn new(config: LocaleConfig) -> Self {
        Self { config }
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        self.config.locale()
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.config
            .catalog(self.config.locale())
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.config
                    .catalog(self.config.fallback_locale())
                    .and_then(|catalog| catalog.get(key))
            })
    }
}
