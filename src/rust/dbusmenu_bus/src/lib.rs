// SPDX-FileCopyrightText: 2025 LibreQoE support@libreqos.io
// SPDX-License-Identifier: AGPL-3.0-or-later WITH LicenseRef-LibreQoS-Exception

//! The `dbusmenu_bus` crate is the client side of the `org.ayatana.dbusmenu`
//! interface. It connects to the session bus, finds the exported menu
//! object and exposes the three calls a menu consumer makes when it first
//! shows a menu: `GetLayout`, `GetChildren` and `GetProperties`.
//!
//! Replies are converted into plain Rust types (`LayoutResponse`,
//! `ChildEntry`, `PropertyBag`) so callers never handle D-Bus variants.
//! Anything that wants to drive the calls (the benchmark, tests) works
//! against the `MenuService` trait rather than the proxy itself.

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]
mod call;
mod client;
mod error;
mod layout;
mod property;
mod proxy;

pub use call::MenuCall;
pub use client::{MenuAddress, MenuClient, MenuService};
pub use error::{LayoutError, MenuBusError};
pub use layout::{parse_layout, LayoutIds, LayoutResponse};
pub use property::{ChildEntry, PropertyBag, PropertyValue, STANDARD_PROPERTIES};
pub use proxy::DbusMenuProxy;

/// The well-known bus name of the menu test service.
pub const DBUS_SERVICE: &str = "org.dbusmenu.test";

/// Object path at which the menu bar is exported.
pub const DBUS_PATH: &str = "/MenuBar";

/// Interface implemented by the menu object.
pub const DBUS_INTERFACE: &str = "org.ayatana.dbusmenu";
