// SPDX-License-Identifier: MPL-2.0
//! End-to-end assembly tests: install ordering, fatal propagation, the mount
//! precondition, and the full happy path.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use weft::app::{assemble, mount, AppInstance};
use weft::error::{Error, InstallError, Result};
use weft::host::{HostDocument, MemoryDocument};
use weft::i18n::{LocaleConfig, MessageCatalog};
use weft::plugin::{
    default_stack, ComponentRegistry, Localization, Plugin, Route, Router, Store,
};

/// Probe plugin that records the order it was installed in, and can be made
/// to refuse installation.
struct Probe {
    name: &'static str,
    calls: Rc<RefCell<Vec<&'static str>>>,
    fail: bool,
}

impl Probe {
    fn new(name: &'static str, calls: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            name,
            calls: Rc::clone(calls),
            fail: false,
        }
    }

    fn failing(name: &'static str, calls: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            name,
            calls: Rc::clone(calls),
            fail: true,
        }
    }
}

impl Plugin for Probe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn install(&self, _app: &mut AppInstance) -> std::result::Result<(), InstallError> {
        self.calls.borrow_mut().push(self.name);
        if self.fail {
            return Err(InstallError::new(self.name, "instrumented failure"));
        }
        Ok(())
    }
}

fn spec_locale_config() -> LocaleConfig {
    let mut en = MessageCatalog::new();
    en.insert("greeting", "Hello");
    let mut cn = MessageCatalog::new();
    cn.insert("greeting", "你好");

    let mut catalogs = BTreeMap::new();
    catalogs.insert("en".parse().unwrap(), en);
    catalogs.insert("cn".parse().unwrap(), cn);

    LocaleConfig::new("cn".parse().unwrap(), "en".parse().unwrap(), catalogs)
}

fn spec_routes() -> Vec<Route> {
    vec![Route::new("home", "/"), Route::new("chat", "/chat")]
}

/// The entry-point sequence: assemble, then mount. Mirrors `main`.
fn boot(
    steps: Vec<Box<dyn Plugin>>,
    document: &mut dyn HostDocument,
    selector: &str,
) -> Result<()> {
    let app = assemble(steps)?;
    mount(app, document, selector)
}

#[test]
fn store_installs_before_router_and_i18n_before_ui() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let steps: Vec<Box<dyn Plugin>> = vec![
        Box::new(Probe::new("i18n", &calls)),
        Box::new(Probe::new("store", &calls)),
        Box::new(Probe::new("router", &calls)),
        Box::new(Probe::new("ui", &calls)),
    ];

    assemble(steps).expect("all probes succeed");

    let calls = calls.borrow();
    let index = |name| calls.iter().position(|n| *n == name).expect(name);
    assert!(index("store") < index("router"));
    assert!(index("i18n") < index("ui"));
}

#[test]
fn default_stack_installs_in_the_documented_order() {
    let app = assemble(default_stack(spec_locale_config(), spec_routes()))
        .expect("default stack assembles");
    assert_eq!(
        app.installed(),
        &["localization", "store", "router", "ui-components"]
    );
}

#[test]
fn failing_store_install_aborts_before_mount() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let steps: Vec<Box<dyn Plugin>> = vec![
        Box::new(Probe::new("i18n", &calls)),
        Box::new(Probe::failing("store", &calls)),
        Box::new(Probe::new("router", &calls)),
        Box::new(Probe::new("ui", &calls)),
    ];
    let mut document = MemoryDocument::with_element("#app");

    let err = boot(steps, &mut document, "#app").unwrap_err();

    // The error reaches the entry point unmodified.
    assert_eq!(
        err,
        Error::Install(InstallError::new("store", "instrumented failure"))
    );
    // Assembly stopped at the failing plugin; mount was never invoked.
    assert_eq!(*calls.borrow(), ["i18n", "store"]);
    assert_eq!(document.mount_count(), 0);
}

#[test]
fn mount_surfaces_a_missing_host_element() {
    let mut document = MemoryDocument::new();

    let err = boot(
        default_stack(spec_locale_config(), spec_routes()),
        &mut document,
        "#app",
    )
    .unwrap_err();

    assert_eq!(err, Error::MissingHost("#app".into()));
    assert_eq!(document.mount_count(), 0);
}

#[test]
fn happy_path_installs_four_plugins_and_mounts_once() {
    let mut document = MemoryDocument::with_element("#app");

    boot(
        default_stack(spec_locale_config(), spec_routes()),
        &mut document,
        "#app",
    )
    .expect("assembly and mount succeed");

    assert_eq!(document.mount_count(), 1);
    let app = document.mounted_at("#app").expect("instance is live");
    assert_eq!(app.installed().len(), 4);
    assert_eq!(
        app.installed(),
        &["localization", "store", "router", "ui-components"]
    );

    // Every capability is reachable on the mounted instance.
    let l10n = app.extension::<Localization>().expect("localization");
    assert_eq!(l10n.translate("greeting"), Some("你好"));
    assert!(app.extension::<Store>().is_some());
    let router = app.extension::<Router>().expect("router");
    assert_eq!(router.resolve("/").map(|r| r.name.as_str()), Some("home"));
    assert!(app.extension::<ComponentRegistry>().is_some());
}
