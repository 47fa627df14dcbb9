// SPDX-License-Identifier: MPL-2.0
use super::AppInstance;
use crate::error::{Error, Result};
use crate::plugin::Plugin;

/// Creates a fresh instance and installs `steps` strictly in order, one
/// registration call per plugin.
///
/// The order of `steps` is the order of installation; nothing here reorders
/// or resolves dependencies at runtime. A failed install propagates
/// immediately — the partially configured instance is dropped, and the error
/// reaches the caller unmodified.
pub fn assemble(steps: Vec<Box<dyn Plugin>>) -> Result<AppInstance> {
    let mut app = AppInstance::new();
    for step in &steps {
        app.register(step.as_ref()).map_err(Error::Install)?;
    }
    log::info!("assembled application with {} plugins", app.installed().len());
    Ok(app)
}
