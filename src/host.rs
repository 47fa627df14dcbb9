// SPDX-License-Identifier: MPL-2.0
//! The seam between the composition root and the rendering engine's
//! document. The engine itself is an external collaborator; this crate only
//! needs one operation from it — take ownership of an assembled instance and
//! attach it under the element a selector names.

use crate::app::AppInstance;
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// A DOM-like document the application can be mounted into.
pub trait HostDocument {
    /// Hands `app` to the element matching `selector` and triggers first
    /// render. Fails with [`Error::MissingHost`] when nothing matches; the
    /// instance is dropped in that case, never left attached-but-unreachable.
    fn attach(&mut self, selector: &str, app: AppInstance) -> Result<()>;
}

/// In-process host document: a set of registered elements and the instances
/// mounted under them. Used by the binary entry point and by tests; a real
/// rendering engine supplies its own [`HostDocument`] in an embedding.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: BTreeSet<String>,
    mounted: Vec<(String, AppInstance)>,
}

impl MemoryDocument {
    /// An empty document with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing a single element addressable by `selector`.
    pub fn with_element(selector: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.add_element(selector);
        document
    }

    pub fn add_element(&mut self, selector: impl Into<String>) {
        self.elements.insert(selector.into());
    }

    /// The instance mounted under `selector`, if any.
    pub fn mounted_at(&self, selector: &str) -> Option<&AppInstance> {
        self.mounted
            .iter()
            .rev()
            .find(|(s, _)| s == selector)
            .map(|(_, app)| app)
    }

    pub fn mount_count(&self) -> usize {
        self.mounted.len()
    }
}

impl HostDocument for MemoryDocument {
    fn attach(&mut self, selector: &str, app: AppInstance) -> Result<()> {
        if !self.elements.contains(selector) {
            return Err(Error::MissingHost(selector.to_string()));
        }
        self.mounted.push((selector.to_string(), app));
        Ok(())
    }
}
