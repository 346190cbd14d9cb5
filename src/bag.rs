//! A dynamic [`Owner`] backed by a hashbrown map.

use crate::error::{FluentError, Result};
use crate::owner::Owner;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a slot may be accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    /// Readable and writable
    ReadWrite,
    /// Readable only
    ReadOnly,
    /// Writable only
    WriteOnly,
}

impl Access {
    #[inline]
    fn readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    #[inline]
    fn writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Slot {
    value: Value,
    access: Access,
}

/// Named slots of JSON values with per-slot access.
///
/// Only declared slots exist; writing an undeclared name fails with
/// [`FluentError::UnknownProperty`].
///
/// ```rust
/// use serde_json::json;
/// use sugars_fluent::{Owner, PropertyBag};
///
/// let mut bag = PropertyBag::new("Post")
///     .with_property("title", json!("draft"))
///     .with_read_only("id", json!(7));
///
/// bag.set_property("title", json!("final"))?;
/// assert_eq!(bag.get("title"), Some(&json!("final")));
/// assert!(bag.set_property("id", json!(8)).unwrap_err().is_read_only());
/// # Ok::<(), sugars_fluent::FluentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyBag {
    name: String,
    slots: HashMap<String, Slot>,
}

impl PropertyBag {
    /// Empty bag; `name` appears in error messages
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    /// Declare a slot with explicit access
    pub fn declare(&mut self, name: impl Into<String>, value: Value, access: Access) -> &mut Self {
        self.slots.insert(name.into(), Slot { value, access });
        self
    }

    /// Declare a read-write slot
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.declare(name, value.into(), Access::ReadWrite);
        self
    }

    /// Declare a read-only slot
    pub fn with_read_only(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.declare(name, value.into(), Access::ReadOnly);
        self
    }

    /// Declare a write-only slot, initially null
    pub fn with_write_only(mut self, name: impl Into<String>) -> Self {
        self.declare(name, Value::Null, Access::WriteOnly);
        self
    }

    /// Name used in error messages
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Peek at a slot regardless of access
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    /// Access mode of a declared slot
    pub fn access(&self, name: &str) -> Option<Access> {
        self.slots.get(name).map(|slot| slot.access)
    }

    /// Number of declared slots
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is declared
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Snapshot of readable slots as a JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.slots
                .iter()
                .filter(|(_, slot)| slot.access.readable())
                .map(|(name, slot)| (name.clone(), slot.value.clone()))
                .collect(),
        )
    }
}

impl Owner for PropertyBag {
    fn can_set_property(&self, name: &str) -> bool {
        self.access(name).is_some_and(Access::writable)
    }

    fn can_get_property(&self, name: &str) -> bool {
        self.access(name).is_some_and(Access::readable)
    }

    fn get_property(&self, name: &str) -> Result<Value> {
        match self.slots.get(name) {
            Some(slot) if slot.access.readable() => Ok(slot.value.clone()),
            Some(_) => Err(FluentError::write_only(&self.name, name)),
            None => Err(FluentError::unknown_property(&self.name, name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match self.slots.get_mut(name) {
            Some(slot) if slot.access.writable() => {
                slot.value = value;
                Ok(())
            }
            Some(_) => Err(FluentError::read_only(&self.name, name)),
            None => Err(FluentError::unknown_property(&self.name, name)),
        }
    }

    fn unset_property(&mut self, name: &str) -> Result<()> {
        match self.slots.get_mut(name) {
            Some(slot) if slot.access.writable() => {
                slot.value = Value::Null;
                Ok(())
            }
            Some(_) => Err(FluentError::read_only(&self.name, name)),
            None => Ok(()),
        }
    }

    fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.slots.keys().cloned().collect();
        names.sort();
        names
    }
}
