// SPDX-License-Identifier: MPL-2.0
use super::Plugin;
use crate::app::AppInstance;
use crate::error::InstallError;
use std::collections::BTreeSet;

const NAME: &str = "ui-components";

/// Installs the UI component library's globally available components.
/// Installed last so its setup observes a fully wired instance.
pub struct UiPlugin {
    components: Vec<&'static str>,
}

impl UiPlugin {
    pub fn new(components: Vec<&'static str>) -> Self {
        Self { components }
    }

    /// The component set the bundled library contributes.
    pub fn with_default_components() -> Self {
        Self::new(vec!["Button", "Input", "Layout", "Menu", "Modal", "Spin"])
    }
}

impl Plugin for UiPlugin {
    fn name(&self) -> &'static str {
        NAME
    }

    fn install(&self, app: &mut AppInstance) -> Result<(), InstallError> {
        let mut registry = ComponentRegistry::default();
        for component in &self.components {
            if !registry.add(component) {
                return Err(InstallError::new(
                    NAME,
                    format!("component '{component}' registered twice"),
                ));
            }
        }
        log::debug!(
            "ui components joining plugins {:?}",
            app.installed()
        );
        app.insert_extension(registry);
        Ok(())
    }
}

/// The installed capability: the names of components available globally to
/// every view. Rendering them is the component library's concern.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    names: BTreeSet<String>,
}

impl ComponentRegistry {
    fn add(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
