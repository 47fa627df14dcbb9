// SPDX-License-Identifier: MPL-2.0
use super::AppInstance;
use crate::error::Result;
use crate::host::HostDocument;

/// Attaches the fully assembled instance to the host element matched by
/// `selector`, triggering first render.
///
/// Precondition: the element exists in the document at call time — there is
/// no waiting or polling. A missing host surfaces as
/// [`Error::MissingHost`](crate::error::Error::MissingHost). The instance is
/// consumed: after a successful mount it belongs to the host, and no further
/// plugin registration is possible.
pub fn mount(app: AppInstance, document: &mut dyn HostDocument, selector: &str) -> Result<()> {
    log::info!("mounting application at '{selector}'");
    document.attach(selector, app)
}
