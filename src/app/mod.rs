// SPDX-License-Identifier: MPL-2.0
//! The application instance and the two operations that produce a running
//! application from it: ordered assembly and mounting.
//!
//! Control flow is strictly linear and synchronous. `assemble` creates one
//! instance and installs the plugins in order; `mount` hands the finished
//! instance to the host document. There is no partial-assembly state worth
//! keeping: the first installation failure aborts startup.

mod assembler;
mod mount;

pub use assembler::assemble;
pub use mount::mount;

use crate::error::InstallError;
use crate::plugin::Plugin;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// The mutable aggregate that plugins install their capabilities into.
///
/// During assembly it is owned exclusively by the assembler; ownership
/// transfers to the host document when the mount step completes, after which
/// further registration is unrepresentable.
#[derive(Default)]
pub struct AppInstance {
    extensions: HashMap<TypeId, Box<dyn Any>>,
    installed: Vec<&'static str>,
}

impl AppInstance {
    /// A fresh, unconfigured instance with no plugins installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs one plugin. Called exactly once per plugin, in the order the
    /// assembler dictates; the plugin's own precondition failures propagate
    /// as [`InstallError`].
    pub fn register(&mut self, plugin: &dyn Plugin) -> Result<(), InstallError> {
        log::debug!("installing plugin '{}'", plugin.name());
        plugin.install(self)?;
        self.installed.push(plugin.name());
        Ok(())
    }

    /// Stores a capability under its type, replacing any previous value of
    /// the same type.
    pub fn insert_extension<T: Any>(&mut self, value: T) {
        self.extensions.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn extension<T: Any>(&self) -> Option<&T> {
        self.extensions
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn extension_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.extensions
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn has_extension<T: Any>(&self) -> bool {
        self.extensions.contains_key(&TypeId::of::<T>())
    }

    /// Names of successfully installed plugins, in installation order.
    pub fn installed(&self) -> &[&'static str] {
        &self.installed
    }
}

impl fmt::Debug for AppInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppInstance")
            .field("installed", &self.installed)
            .finish()
    }
}
