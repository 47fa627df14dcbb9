// SPDX-License-Identifier: MPL-2.0
use super::Plugin;
use crate::app::AppInstance;
use crate::error::InstallError;

const NAME: &str = "router";

/// One entry in the static route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub path: String,
}

impl Route {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Installs the client-side router with a static route table. Installed
/// after the store it may read, before first render.
pub struct RouterPlugin {
    routes: Vec<Route>,
}

impl RouterPlugin {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

impl Plugin for RouterPlugin {
    fn name(&self) -> &'static str {
        NAME
    }

    fn install(&self, app: &mut AppInstance) -> Result<(), InstallError> {
        if self.routes.is_empty() {
            return Err(InstallError::new(NAME, "route table is empty"));
        }
        if let Some(route) = self.routes.iter().find(|r| !r.path.starts_with('/')) {
            return Err(InstallError::new(
                NAME,
                format!("route '{}' has a non-absolute path '{}'", route.name, route.path),
            ));
        }
        app.insert_extension(Router::new(self.routes.clone()));
        Ok(())
    }
}

/// The installed capability. Path matching beyond exact lookup (parameters,
/// guards, history) is the router subsystem's concern, outside this crate.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }
}
