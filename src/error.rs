//! Error types for fluent accessor operations.
//!
//! Every message names the component and the canonical property, never the
//! alias that was used to reach it.

use thiserror::Error;

/// Result type alias for fluent operations
pub type Result<T> = std::result::Result<T, FluentError>;

/// Main error type for all fluent operations
#[derive(Error, Debug)]
pub enum FluentError {
    /// Target property does not exist on the owner
    #[error("Setting unknown property: {component}::{property}")]
    UnknownProperty {
        /// Component name carried in configuration
        component: String,
        /// Canonical property name
        property: String,
    },

    /// Target property exists but is only readable
    #[error("Setting read-only property: {component}::{property}")]
    ReadOnlyProperty {
        /// Component name carried in configuration
        component: String,
        /// Canonical property name
        property: String,
    },

    /// Target property exists but is only writable
    #[error("Getting write-only property: {component}::{property}")]
    WriteOnlyProperty {
        /// Component name carried in configuration
        component: String,
        /// Canonical property name
        property: String,
    },

    /// Append attempted on a populated, non-sequence property
    #[error("Cannot add an item to {component}::{property}: {reason}")]
    InvalidOperation {
        /// Component name carried in configuration
        component: String,
        /// Canonical property name
        property: String,
        /// Why the operation was refused
        reason: String,
    },

    /// No attached behavior recognized the method name
    #[error("Calling unknown method: {component}::{method}()")]
    UnknownMethod {
        /// Component name carried in configuration
        component: String,
        /// Method name as called
        method: String,
    },

    /// A recognized method was called with unusable arguments
    #[error("Invalid arguments for {component}::{method}(): {reason}")]
    InvalidArgument {
        /// Component name carried in configuration
        component: String,
        /// Method name as called
        method: String,
        /// What was wrong with the arguments
        reason: String,
    },

    /// A dynamic value could not be converted to or from a typed field
    #[error("Cannot convert value for {component}::{property}: {source}")]
    Conversion {
        /// Component name
        component: String,
        /// Canonical property name
        property: String,
        /// The underlying serde_json error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be parsed
    #[error("Invalid fluent configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FluentError {
    /// Build an `UnknownProperty` error
    pub fn unknown_property(component: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            component: component.into(),
            property: property.into(),
        }
    }

    /// Build a `ReadOnlyProperty` error
    pub fn read_only(component: impl Into<String>, property: impl Into<String>) -> Self {
        Self::ReadOnlyProperty {
            component: component.into(),
            property: property.into(),
        }
    }

    /// Build a `WriteOnlyProperty` error
    pub fn write_only(component: impl Into<String>, property: impl Into<String>) -> Self {
        Self::WriteOnlyProperty {
            component: component.into(),
            property: property.into(),
        }
    }

    /// Build an `InvalidOperation` error
    pub fn invalid_operation(
        component: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOperation {
            component: component.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }

    /// Build an `UnknownMethod` error
    pub fn unknown_method(component: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            component: component.into(),
            method: method.into(),
        }
    }

    /// Build an `InvalidArgument` error
    pub fn invalid_argument(
        component: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            component: component.into(),
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Build a `Conversion` error
    pub fn conversion(
        component: impl Into<String>,
        property: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::Conversion {
            component: component.into(),
            property: property.into(),
            source,
        }
    }

    /// True when no behavior recognized the method
    pub fn is_unknown_method(&self) -> bool {
        matches!(self, Self::UnknownMethod { .. })
    }

    /// True when the property does not exist on the owner
    pub fn is_unknown_property(&self) -> bool {
        matches!(self, Self::UnknownProperty { .. })
    }

    /// True when the property exists but cannot be set
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnlyProperty { .. })
    }

    /// True when an append was refused
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    /// The canonical property this error concerns, if any
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::UnknownProperty { property, .. }
            | Self::ReadOnlyProperty { property, .. }
            | Self::WriteOnlyProperty { property, .. }
            | Self::InvalidOperation { property, .. }
            | Self::Conversion { property, .. } => Some(property),
            _ => None,
        }
    }
}
