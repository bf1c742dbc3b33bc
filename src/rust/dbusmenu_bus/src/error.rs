use crate::MenuCall;
use thiserror::Error;

/// Errors raised while talking to the menu service.
#[derive(Error, Debug)]
pub enum MenuBusError {
    /// The session bus could not be reached, or the service address was
    /// rejected by the bus library.
    #[error("Unable to connect to {address}: {source}")]
    ConnectionError {
        /// Human readable `service path` pair.
        address: String,
        /// Underlying bus error.
        #[source]
        source: zbus::Error,
    },

    /// The bus is up but nobody owns the requested service name.
    #[error("{0} is not on the session bus. Check that the menu service is running.")]
    ServiceUnavailable(String),

    /// A `GetLayout` reply could not yield the ids needed by the pass.
    #[error("Malformed layout: {0}")]
    MalformedLayout(#[from] LayoutError),

    /// One of the remote methods returned an error.
    #[error("{call} failed: {source}")]
    RemoteCallError {
        /// The method that failed.
        call: MenuCall,
        /// Underlying bus error.
        #[source]
        source: zbus::Error,
    },
}

/// Reasons a layout document is rejected.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Not well-formed XML.
    #[error("unable to parse layout XML: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The root element carries no `id` attribute.
    #[error("root element has no id attribute")]
    MissingRootId,

    /// The first `menu` descendant carries no `id` attribute.
    #[error("first menu child has no id attribute")]
    MissingChildId,

    /// An `id` attribute is not an `int32`.
    #[error("invalid id attribute {0:?}")]
    InvalidId(String),

    /// The root has no `menu` descendant.
    #[error("root element has no menu child")]
    NoChildMenu,
}
