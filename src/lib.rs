// SPDX-License-Identifier: MPL-2.0
//! `weft` is the composition root of a modular, internationalized front-end
//! application.
//!
//! It assembles four independently-developed subsystems — a localization
//! runtime, a centralized state store, a client-side router, and a UI
//! component library — into one application instance and attaches it to a
//! host display surface. The sequence is strictly linear: build the locale
//! configuration, create the instance, install the plugins in a fixed order,
//! mount. Any failure along the way aborts startup.

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod i18n;
pub mod plugin;
