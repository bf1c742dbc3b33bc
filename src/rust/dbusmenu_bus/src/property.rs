use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};
use zbus::zvariant::{OwnedValue, Value};

/// The properties requested from every item: `type`, `label`, `enabled`
/// and `icon-name`.
pub const STANDARD_PROPERTIES: [&str; 4] = ["type", "label", "enabled", "icon-name"];

/// Properties of one menu item, keyed by property name.
pub type PropertyBag = BTreeMap<String, PropertyValue>;

/// A single property value, as carried in the `a{sv}` replies.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Strings, object paths and signatures.
    Str(String),
    /// Signed integers of any width.
    Int(i64),
    /// Bytes and unsigned integers of any width.
    UInt(u64),
    /// Booleans.
    Bool(bool),
    /// Doubles.
    Double(f64),
    /// Containers and anything else, kept as its debug rendering.
    Other(String),
}

impl From<&Value<'_>> for PropertyValue {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(*b),
            Value::U8(n) => Self::UInt(u64::from(*n)),
            Value::U16(n) => Self::UInt(u64::from(*n)),
            Value::U32(n) => Self::UInt(u64::from(*n)),
            Value::U64(n) => Self::UInt(*n),
            Value::I16(n) => Self::Int(i64::from(*n)),
            Value::I32(n) => Self::Int(i64::from(*n)),
            Value::I64(n) => Self::Int(*n),
            Value::F64(n) => Self::Double(*n),
            Value::Str(s) => Self::Str(s.as_str().to_string()),
            Value::ObjectPath(p) => Self::Str(p.as_str().to_string()),
            Value::Value(inner) => Self::from(inner.as_ref()),
            other => Self::Other(format!("{other:?}")),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::Int(n) => write!(f, "{n}"),
            PropertyValue::UInt(n) => write!(f, "{n}"),
            PropertyValue::Bool(true) => f.write_str("True"),
            PropertyValue::Bool(false) => f.write_str("False"),
            PropertyValue::Double(n) => write!(f, "{n}"),
            PropertyValue::Other(s) => f.write_str(s),
        }
    }
}

/// One element of a `GetChildren` reply.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildEntry {
    /// Item id.
    pub id: i32,

    /// The requested properties the item actually has.
    pub properties: PropertyBag,
}

/// Converts an `a{sv}` reply into a `PropertyBag`.
pub(crate) fn property_bag(raw: HashMap<String, OwnedValue>) -> PropertyBag {
    raw.into_iter()
        .map(|(name, value)| {
            let value = PropertyValue::from(&*value);
            (name, value)
        })
        .collect()
}
