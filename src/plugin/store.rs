// SPDX-License-Identifier: MPL-2.0
use super::Plugin;
use crate::app::AppInstance;
use crate::error::InstallError;
use std::collections::HashMap;

const NAME: &str = "store";

/// Installs the centralized state store. Installed before the router because
/// route-entry logic may read store state during initial navigation
/// resolution.
#[derive(Debug, Default)]
pub struct StorePlugin;

impl StorePlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for StorePlugin {
    fn name(&self) -> &'static str {
        NAME
    }

    fn install(&self, app: &mut AppInstance) -> Result<(), InstallError> {
        app.insert_extension(Store::default());
        Ok(())
    }
}

/// The installed capability: a keyed state container shared by the other
/// subsystems. Reactivity and subscription semantics live in the store
/// subsystem itself, outside this crate.
#[derive(Debug, Default)]
pub struct Store {
    state: HashMap<String, String>,
}

impl Store {
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.state.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.state.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
