// SPDX-License-Identifier: MPL-2.0
//! The plugin capability interface and the fixed installation stack.
//!
//! Each subsystem is consumed through a single entry point: install yourself
//! into the application instance, or fail with an [`InstallError`]. The
//! composition root treats all four subsystems uniformly through this trait
//! and knows nothing about their internals.

mod localization;
mod router;
mod store;
mod ui;

pub use localization::{Localization, LocalizationPlugin};
pub use router::{Route, Router, RouterPlugin};
pub use store::{Store, StorePlugin};
pub use ui::{ComponentRegistry, UiPlugin};

use crate::app::AppInstance;
use crate::error::InstallError;
use crate::i18n::LocaleConfig;

/// A self-contained capability installed into the application instance via a
/// single registration call.
pub trait Plugin {
    /// Stable name used in logs and installation errors.
    fn name(&self) -> &'static str;

    /// Performs the plugin's own setup against the instance. No return value
    /// of interest; fails when the plugin's internal preconditions are unmet.
    fn install(&self, app: &mut AppInstance) -> Result<(), InstallError>;
}

/// The ordered installation list for the full application.
///
/// The order is a first-class artifact, hard-coded rather than resolved at
/// runtime: localization first so later plugins see translated strings at
/// first render; the store before the router whose route-entry logic may
/// read it during initial navigation; the UI library last so its setup can
/// observe a fully wired instance.
pub fn default_stack(locale: LocaleConfig, routes: Vec<Route>) -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(LocalizationPlugin::new(locale)),
        Box::new(StorePlugin::new()),
        Box::new(RouterPlugin::new(routes)),
        Box::new(UiPlugin::with_default_components()),
    ]
}
