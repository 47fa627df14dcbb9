// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the bootstrap configuration.

/// Selector of the host element the application mounts into.
pub const DEFAULT_HOST_SELECTOR: &str = "#app";

/// Active locale at first render.
pub const DEFAULT_LOCALE: &str = "cn";

/// Locale consulted when the active locale lacks a translation.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";
