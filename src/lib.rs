//! # Sugars Fluent
//!
//! Fluent `set<Prop>` / `unset<Prop>` / `add<Prop>` accessors synthesized from
//! declared attributes and dispatched by method name.
//!
//! A [`FluentBehavior`] is configured once with an [`AttributeSpec`] (an
//! allow-list with optional aliases) and then answers method names against
//! any [`Owner`]:
//!
//! - `setTitle(v)` assigns `title`
//! - `unsetTitle()` clears `title`
//! - `addTag(x)` appends `x` to the sequence behind the `tag` alias
//!
//! The three primitives `setProperty`, `unsetProperty` and `addItemTo` are
//! always available and return the owner so calls chain.
//!
//! ## Features
//!
//! - `property-bag` - [`PropertyBag`], a dynamic owner of JSON values with per-slot access
//! - `macros` - `attributes!` literal syntax and `owner_fields!` for typed structs
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "property-bag")]
//! # {
//! use serde_json::json;
//! use sugars_fluent::{AttributeSpec, Component, FluentBehavior, FluentConfig, PropertyBag};
//!
//! let bag = PropertyBag::new("Post")
//!     .with_property("title", json!(null))
//!     .with_property("tags", json!(null))
//!     .with_read_only("id", json!(42));
//!
//! let config = FluentConfig::new()
//!     .component("Post")
//!     .attributes(AttributeSpec::new().bare("title").bare("id").alias("tag", "tags"));
//!
//! let mut post = Component::new("Post", bag).with_behavior(FluentBehavior::new(config));
//! post.invoke("setTitle", &[json!("Hello")])?
//!     .invoke("addTag", &[json!("rust")])?
//!     .invoke("addTag", &[json!("serde")])?;
//!
//! assert_eq!(post.owner().get("tags"), Some(&json!(["rust", "serde"])));
//! assert!(post.invoke("setId", &[json!(7)]).unwrap_err().is_read_only());
//! # }
//! # Ok::<(), sugars_fluent::FluentError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod action;
pub mod attributes;
pub mod behavior;
pub mod component;
pub mod config;
pub mod error;
pub mod owner;

#[cfg(feature = "property-bag")]
pub mod bag;

#[cfg(feature = "macros")]
pub mod macros;

pub use action::{resolve_method, Action, ACTIONS};
pub use attributes::{Attribute, AttributeSpec};
pub use behavior::{Behavior, Dispatch, Fluent, FluentBehavior, MethodTarget};
pub use component::Component;
pub use config::FluentConfig;
pub use error::{FluentError, Result};
pub use owner::{is_empty_value, Owner};

#[cfg(feature = "property-bag")]
pub use bag::{Access, PropertyBag};

#[cfg(feature = "macros")]
#[doc(hidden)]
pub use macros::__private;
