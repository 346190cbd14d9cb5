//! Configuration captured when a fluent behavior is attached.

use crate::attributes::AttributeSpec;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default component name used in error messages
pub const DEFAULT_COMPONENT: &str = "Component";

/// Fluent behavior configuration.
///
/// Read-only once the behavior is built.
///
/// ```rust
/// use sugars_fluent::{AttributeSpec, FluentConfig};
///
/// let config = FluentConfig::new()
///     .component("Post")
///     .attributes(AttributeSpec::new().bare("title").alias("tag", "tags"))
///     .init_arrays_if_empty(false);
/// assert_eq!(config.component, "Post");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FluentConfig {
    /// Allow-list and aliases; empty means every property is permitted
    pub attributes: AttributeSpec,
    /// Whether an append may turn an empty, non-sequence property into `[]`
    pub init_arrays_if_empty: bool,
    /// Component name used in error messages
    pub component: String,
}

impl Default for FluentConfig {
    fn default() -> Self {
        Self {
            attributes: AttributeSpec::new(),
            init_arrays_if_empty: true,
            component: DEFAULT_COMPONENT.to_string(),
        }
    }
}

impl FluentConfig {
    /// Wildcard configuration with default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the attribute spec
    pub fn attributes(mut self, attributes: impl Into<AttributeSpec>) -> Self {
        self.attributes = attributes.into();
        self
    }

    /// Set the append initialization policy
    pub fn init_arrays_if_empty(mut self, init: bool) -> Self {
        self.init_arrays_if_empty = init;
        self
    }

    /// Set the component name used in error messages
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.component = name.into();
        self
    }

    /// Parse from a JSON document
    ///
    /// ```rust
    /// use sugars_fluent::FluentConfig;
    ///
    /// let config = FluentConfig::from_json(r#"{
    ///     "component": "Post",
    ///     "attributes": {"0": "title", "tag": "tags"},
    ///     "initArraysIfEmpty": false
    /// }"#).unwrap();
    /// assert_eq!(config.attributes.resolve_property("tag").as_deref(), Some("tags"));
    /// assert!(!config.init_arrays_if_empty);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
