// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Env};
use weft::app::{assemble, mount};
use weft::config::BootConfig;
use weft::error::{Error, Result};
use weft::host::MemoryDocument;
use weft::i18n::{self, LocaleConfig};
use weft::plugin::{default_stack, Route};

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let boot = BootConfig::default();
    let locale = LocaleConfig::new(
        boot.locale
            .parse()
            .map_err(|e| Error::Config(format!("invalid locale '{}': {e}", boot.locale)))?,
        boot.fallback_locale.parse().map_err(|e| {
            Error::Config(format!(
                "invalid fallback locale '{}': {e}",
                boot.fallback_locale
            ))
        })?,
        i18n::embedded_catalogs(),
    );

    let routes = vec![Route::new("home", "/"), Route::new("chat", "/chat")];

    let mut document = MemoryDocument::with_element(boot.host_selector.as_str());
    let app = assemble(default_stack(locale, routes))?;
    mount(app, &mut document, &boot.host_selector)?;

    log::info!("application is live at '{}'", boot.host_selector);
    Ok(())
}
