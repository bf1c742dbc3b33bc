use std::collections::HashMap;
use zbus::{proxy, zvariant::OwnedValue};

/// Client side of the `org.ayatana.dbusmenu` interface, limited to the
/// calls a menu consumer issues when it first displays a menu.
///
/// Destination and path always come from a `MenuAddress`. `GetLayout` is
/// not declared here: services disagree on the revision's type (`i` or
/// `u`), so `MenuClient` issues it through the raw proxy and decodes the
/// reply itself.
#[proxy(interface = "org.ayatana.dbusmenu", gen_blocking = false)]
pub trait DbusMenu {
    /// Returns `(id, properties)` for every child of `id`.
    fn get_children(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> zbus::Result<Vec<(i32, HashMap<String, OwnedValue>)>>;

    /// Returns the requested properties of item `id`.
    fn get_properties(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> zbus::Result<HashMap<String, OwnedValue>>;
}
