use crate::{
    property::property_bag, ChildEntry, DbusMenuProxy, LayoutResponse, MenuBusError, MenuCall,
    PropertyBag, DBUS_INTERFACE, DBUS_PATH, DBUS_SERVICE,
};
use std::fmt;
use tracing::{debug, error, info};
use zbus::{fdo::DBusProxy, names::BusName, CacheProperties, Connection, Message};

/// Where the menu object lives on the session bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuAddress {
    /// Well-known bus name, e.g. `org.dbusmenu.test`.
    pub service: String,

    /// Object path, e.g. `/MenuBar`.
    pub path: String,
}

impl Default for MenuAddress {
    fn default() -> Self {
        Self {
            service: DBUS_SERVICE.to_string(),
            path: DBUS_PATH.to_string(),
        }
    }
}

impl fmt::Display for MenuAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.service, self.path, DBUS_INTERFACE)
    }
}

/// The three menu calls, returning decoded replies.
///
/// `MenuClient` implements this over D-Bus. Every call is a single
/// blocking round-trip from the caller's point of view: the future
/// resolves only once the reply (or error) has arrived.
#[allow(async_fn_in_trait)]
pub trait MenuService {
    /// `GetLayout(parent_id)`
    async fn get_layout(&self, parent_id: i32) -> Result<LayoutResponse, MenuBusError>;

    /// `GetChildren(id, property_names)`
    async fn get_children(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> Result<Vec<ChildEntry>, MenuBusError>;

    /// `GetProperties(id, property_names)`
    async fn get_properties(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> Result<PropertyBag, MenuBusError>;
}

/// A session bus connection bound to one exported menu object.
pub struct MenuClient {
    proxy: DbusMenuProxy<'static>,
}

impl MenuClient {
    /// Connects to the session bus and binds to the menu at `address`.
    ///
    /// Fails with `ServiceUnavailable` if nobody owns the service name, so
    /// a missing service is reported before any call is made.
    pub async fn connect(address: &MenuAddress) -> Result<Self, MenuBusError> {
        let connection_error = |source: zbus::Error| {
            error!("Unable to connect to {}: {:?}", address, source);
            MenuBusError::ConnectionError {
                address: address.to_string(),
                source,
            }
        };

        let connection = Connection::session().await.map_err(connection_error)?;
        let service = BusName::try_from(address.service.as_str())
            .map_err(|e| connection_error(e.into()))?;
        let has_owner = DBusProxy::new(&connection)
            .await
            .map_err(connection_error)?
            .name_has_owner(service)
            .await
            .map_err(|e| connection_error(e.into()))?;
        if !has_owner {
            error!("{} has no owner on the session bus", address.service);
            return Err(MenuBusError::ServiceUnavailable(address.service.clone()));
        }

        let proxy = DbusMenuProxy::builder(&connection)
            .destination(address.service.clone())
            .and_then(|b| b.path(address.path.clone()))
            .map_err(connection_error)?
            .cache_properties(CacheProperties::No)
            .build()
            .await
            .map_err(connection_error)?;

        info!("Connected to menu at {}", address);
        Ok(Self { proxy })
    }
}

/// Decodes a `GetLayout` reply, accepting the revision as either `int32`
/// or `uint32`.
fn decode_layout_reply(reply: &Message) -> zbus::Result<LayoutResponse> {
    let body = reply.body();
    let (revision, layout) = match body.deserialize::<(i32, String)>() {
        Ok((revision, layout)) => (i64::from(revision), layout),
        Err(_) => {
            let (revision, layout) = body.deserialize::<(u32, String)>()?;
            (i64::from(revision), layout)
        }
    };
    Ok(LayoutResponse { revision, layout })
}

fn remote_error(call: MenuCall, source: zbus::Error) -> MenuBusError {
    error!("{} failed: {:?}", call, source);
    MenuBusError::RemoteCallError { call, source }
}

impl MenuService for MenuClient {
    async fn get_layout(&self, parent_id: i32) -> Result<LayoutResponse, MenuBusError> {
        debug!("GetLayout({parent_id})");
        let reply = self
            .proxy
            .inner()
            .call_method(MenuCall::GetLayout.method_name(), &(parent_id,))
            .await
            .map_err(|e| remote_error(MenuCall::GetLayout, e))?;
        decode_layout_reply(&reply).map_err(|e| remote_error(MenuCall::GetLayout, e))
    }

    async fn get_children(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> Result<Vec<ChildEntry>, MenuBusError> {
        debug!("GetChildren({id}, {property_names:?})");
        let children = self
            .proxy
            .get_children(id, property_names)
            .await
            .map_err(|e| remote_error(MenuCall::GetChildren, e))?;
        Ok(children
            .into_iter()
            .map(|(id, properties)| ChildEntry {
                id,
                properties: property_bag(properties),
            })
            .collect())
    }

    async fn get_properties(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> Result<PropertyBag, MenuBusError> {
        debug!("GetProperties({id}, {property_names:?})");
        let properties = self
            .proxy
            .get_properties(id, property_names)
            .await
            .map_err(|e| remote_error(MenuCall::GetProperties, e))?;
        Ok(property_bag(properties))
    }
}
