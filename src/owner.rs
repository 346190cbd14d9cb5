//! The capability interface fluent operations act upon.

use crate::error::Result;
use serde_json::Value;

/// A mutable object exposing named properties.
///
/// Implementors decide which names exist and whether each is readable and
/// writable. Fluent operations consult `can_set_property` /
/// `can_get_property` before touching storage, so `get_property` and
/// `set_property` only need to fail for conditions the capability checks
/// cannot express (e.g. a value of the wrong shape for a typed field).
///
/// Access to a single owner must be serialized by the caller; nothing here
/// locks.
pub trait Owner {
    /// Whether `name` exists and can be written
    fn can_set_property(&self, name: &str) -> bool;

    /// Whether `name` exists and can be read
    fn can_get_property(&self, name: &str) -> bool;

    /// Read a property
    fn get_property(&self, name: &str) -> Result<Value>;

    /// Write a property
    fn set_property(&mut self, name: &str, value: Value) -> Result<()>;

    /// Clear a property to its absent state. Clearing a name that does not
    /// exist is not an error.
    fn unset_property(&mut self, name: &str) -> Result<()>;

    /// Names of all known properties, used to list synthesized methods in
    /// wildcard mode.
    fn property_names(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<O: Owner + ?Sized> Owner for Box<O> {
    fn can_set_property(&self, name: &str) -> bool {
        (**self).can_set_property(name)
    }

    fn can_get_property(&self, name: &str) -> bool {
        (**self).can_get_property(name)
    }

    fn get_property(&self, name: &str) -> Result<Value> {
        (**self).get_property(name)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        (**self).set_property(name, value)
    }

    fn unset_property(&mut self, name: &str) -> Result<()> {
        (**self).unset_property(name)
    }

    fn property_names(&self) -> Vec<String> {
        (**self).property_names()
    }
}

/// Emptiness as used by the append policy: null, `false`, zero, `""`, and
/// empty containers.
///
/// ```rust
/// use serde_json::json;
/// use sugars_fluent::is_empty_value;
///
/// assert!(is_empty_value(&json!(null)));
/// assert!(is_empty_value(&json!(0)));
/// assert!(is_empty_value(&json!({})));
/// assert!(!is_empty_value(&json!("hello")));
/// ```
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
