//! Fluent accessor behavior: name resolution, primitives and dispatch.
//!
//! A [`FluentBehavior`] is attached to an [`Owner`] and answers method names
//! like `setTitle`, `unsetTitle` and `addTag`. It can also be used directly
//! through its three primitives, which return the owner for chaining.
//!
//! ```rust
//! # #[cfg(feature = "property-bag")]
//! # {
//! use serde_json::json;
//! use sugars_fluent::{FluentBehavior, FluentConfig, PropertyBag};
//!
//! let behavior = FluentBehavior::new(FluentConfig::new());
//! let mut post = PropertyBag::new("Post").with_property("title", json!(null)).with_property("tags", json!([]));
//!
//! behavior
//!     .on(&mut post)
//!     .set_property("title", json!("Hello"))?
//!     .add_item_to("tags", json!("rust"))?
//!     .call("addTags", &[json!("serde")])?;
//!
//! assert_eq!(post.get("tags"), Some(&json!(["rust", "serde"])));
//! # }
//! # Ok::<(), sugars_fluent::FluentError>(())
//! ```

use crate::action::{resolve_method, Action, ACTIONS};
use crate::attributes::Attribute;
use crate::config::FluentConfig;
use crate::error::{FluentError, Result};
use crate::owner::{is_empty_value, Owner};
use serde_json::Value;

/// Name of the universal set primitive when called by name
pub const SET_PROPERTY: &str = "setProperty";
/// Name of the universal unset primitive when called by name
pub const UNSET_PROPERTY: &str = "unsetProperty";
/// Name of the universal append primitive when called by name
pub const ADD_ITEM_TO: &str = "addItemTo";

/// A resolved fluent method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTarget {
    /// What to do
    pub action: Action,
    /// Canonical property to do it to
    pub property: String,
}

/// Result of offering a call to a behavior.
#[derive(Debug)]
pub enum Dispatch {
    /// The behavior performed the call
    Handled,
    /// The behavior recognized the name but could not act; other behaviors
    /// may still handle it
    Declined(FluentError),
}

/// Something that can be attached to an owner and answer method names.
pub trait Behavior<O: ?Sized> {
    /// Whether this behavior recognizes `name`. Must not have side effects.
    fn has_method(&self, name: &str) -> bool;

    /// Perform `name` against `owner`.
    fn dispatch(&self, owner: &mut O, name: &str, args: &[Value]) -> Result<Dispatch>;
}

/// Synthesizes `set<Prop>`, `unset<Prop>` and `add<Prop>` methods for declared
/// attributes.
#[derive(Debug, Clone, Default)]
pub struct FluentBehavior {
    config: FluentConfig,
}

impl FluentBehavior {
    /// Attach-time construction; the configuration is fixed from here on
    pub fn new(config: FluentConfig) -> Self {
        Self { config }
    }

    /// The configuration this behavior was built with
    #[inline]
    pub fn config(&self) -> &FluentConfig {
        &self.config
    }

    #[inline]
    fn component(&self) -> &str {
        &self.config.component
    }

    /// Resolve a method name to an action and canonical property.
    pub fn resolve(&self, name: &str) -> Option<MethodTarget> {
        let (action, token) = resolve_method(name)?;
        let property = self.config.attributes.resolve_property(&token);
        log::trace!("resolve {name}: action={action} token={token} property={property:?}");
        property.map(|property| MethodTarget { action, property })
    }

    /// Whether `name` is a synthesized method of this behavior.
    pub fn supports_method(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Every synthesized method name this behavior accepts for `owner`, sorted.
    ///
    /// Declared attributes supply the names; in wildcard mode they come from
    /// [`Owner::property_names`].
    pub fn synthesized_methods<O: Owner + ?Sized>(&self, owner: &O) -> Vec<String> {
        let tokens: Vec<String> = if self.config.attributes.is_wildcard() {
            owner.property_names()
        } else {
            self.config
                .attributes
                .iter()
                .map(Attribute::token)
                .map(str::to_string)
                .collect()
        };

        let mut methods: Vec<String> = tokens
            .iter()
            .flat_map(|token| ACTIONS.into_iter().map(move |(_, action)| action.method_name(token)))
            .filter(|method| self.supports_method(method))
            .collect();
        methods.sort();
        methods.dedup();
        methods
    }

    /// Assign `value` to `name` and return the owner.
    pub fn set_property<'o, O: Owner + ?Sized>(
        &self,
        owner: &'o mut O,
        name: &str,
        value: Value,
    ) -> Result<&'o mut O> {
        self.ensure_settable(owner, name)?;
        owner.set_property(name, value)?;
        Ok(owner)
    }

    /// Clear `name` and return the owner. Clearing twice is a no-op.
    pub fn unset_property<'o, O: Owner + ?Sized>(
        &self,
        owner: &'o mut O,
        name: &str,
    ) -> Result<&'o mut O> {
        owner.unset_property(name)?;
        Ok(owner)
    }

    /// Append `item` to the sequence stored in `name`, initializing an empty
    /// value according to the configured policy.
    pub fn add_item_to<'o, O: Owner + ?Sized>(
        &self,
        owner: &'o mut O,
        name: &str,
        item: Value,
    ) -> Result<&'o mut O> {
        self.add_item_to_with(owner, name, item, self.config.init_arrays_if_empty)
    }

    /// [`add_item_to`](Self::add_item_to) with an explicit initialization policy.
    ///
    /// The new sequence is built locally and written back in one step, so a
    /// failure leaves the owner untouched.
    pub fn add_item_to_with<'o, O: Owner + ?Sized>(
        &self,
        owner: &'o mut O,
        name: &str,
        item: Value,
        init_on_empty: bool,
    ) -> Result<&'o mut O> {
        self.ensure_settable(owner, name)?;

        let mut items = match owner.get_property(name)? {
            Value::Array(items) => items,
            current if init_on_empty && is_empty_value(&current) => Vec::new(),
            current => {
                let reason = if is_empty_value(&current) {
                    "property is empty and array initialization is disabled"
                } else {
                    "property does not hold an array"
                };
                return Err(FluentError::invalid_operation(self.component(), name, reason));
            }
        };
        items.push(item);
        owner.set_property(name, Value::Array(items))?;
        Ok(owner)
    }

    /// Start a chain of operations against `owner`.
    pub fn on<'a, O: Owner + ?Sized>(&'a self, owner: &'a mut O) -> Fluent<'a, O> {
        Fluent {
            behavior: self,
            owner,
        }
    }

    fn ensure_settable<O: Owner + ?Sized>(&self, owner: &O, name: &str) -> Result<()> {
        if owner.can_set_property(name) {
            Ok(())
        } else if owner.can_get_property(name) {
            Err(FluentError::read_only(self.component(), name))
        } else {
            Err(FluentError::unknown_property(self.component(), name))
        }
    }

    fn call_universal<O: Owner + ?Sized>(
        &self,
        owner: &mut O,
        method: &str,
        args: &[Value],
    ) -> Result<()> {
        let name = args
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| self.bad_args(method, "first argument must be a property name"))?;
        let rest = &args[1..];
        match method {
            SET_PROPERTY => {
                let value = self.single_arg(method, rest)?;
                self.set_property(owner, name, value)?;
            }
            UNSET_PROPERTY => {
                self.no_args(method, rest)?;
                self.unset_property(owner, name)?;
            }
            _ => {
                let (item, init) = self.append_args(method, rest)?;
                self.add_item_to_with(owner, name, item, init)?;
            }
        }
        Ok(())
    }

    fn call_synthesized<O: Owner + ?Sized>(
        &self,
        owner: &mut O,
        method: &str,
        target: &MethodTarget,
        args: &[Value],
    ) -> Result<()> {
        let property = target.property.as_str();
        match target.action {
            Action::Set => {
                let value = self.single_arg(method, args)?;
                self.set_property(owner, property, value)?;
            }
            Action::Unset => {
                self.no_args(method, args)?;
                self.unset_property(owner, property)?;
            }
            Action::Add => {
                let (item, init) = self.append_args(method, args)?;
                self.add_item_to_with(owner, property, item, init)?;
            }
        }
        Ok(())
    }

    fn single_arg(&self, method: &str, args: &[Value]) -> Result<Value> {
        match args {
            [value] => Ok(value.clone()),
            _ => Err(self.bad_args(method, format!("expected 1 value, got {}", args.len()))),
        }
    }

    fn no_args(&self, method: &str, args: &[Value]) -> Result<()> {
        if args.is_empty() {
            Ok(())
        } else {
            Err(self.bad_args(method, format!("expected no values, got {}", args.len())))
        }
    }

    fn append_args(&self, method: &str, args: &[Value]) -> Result<(Value, bool)> {
        match args {
            [item] => Ok((item.clone(), self.config.init_arrays_if_empty)),
            [item, Value::Bool(init)] => Ok((item.clone(), *init)),
            [_, _] => Err(self.bad_args(method, "initOnEmpty must be a boolean")),
            _ => Err(self.bad_args(
                method,
                format!("expected an item and optional initOnEmpty, got {} values", args.len()),
            )),
        }
    }

    fn bad_args(&self, method: &str, reason: impl Into<String>) -> FluentError {
        FluentError::invalid_argument(self.component(), method, reason)
    }
}

fn is_universal(name: &str) -> bool {
    matches!(name, SET_PROPERTY | UNSET_PROPERTY | ADD_ITEM_TO)
}

impl<O: Owner + ?Sized> Behavior<O> for FluentBehavior {
    fn has_method(&self, name: &str) -> bool {
        is_universal(name) || self.supports_method(name)
    }

    fn dispatch(&self, owner: &mut O, name: &str, args: &[Value]) -> Result<Dispatch> {
        if is_universal(name) {
            self.call_universal(owner, name, args)?;
            log::debug!("{}: handled {name}", self.component());
            return Ok(Dispatch::Handled);
        }

        let Some(target) = self.resolve(name) else {
            return Ok(Dispatch::Declined(FluentError::unknown_method(
                self.component(),
                name,
            )));
        };
        if let Err(reason) = self.ensure_settable(owner, &target.property) {
            log::debug!("{}: declined {name}: {reason}", self.component());
            return Ok(Dispatch::Declined(reason));
        }

        self.call_synthesized(owner, name, &target, args)?;
        log::debug!(
            "{}: handled {name} as {} on {}",
            self.component(),
            target.action,
            target.property
        );
        Ok(Dispatch::Handled)
    }
}

/// Chaining handle over a borrowed owner.
///
/// Each step consumes the handle and returns it again, so a failing step
/// ends the chain with `?`.
pub struct Fluent<'a, O: ?Sized> {
    behavior: &'a FluentBehavior,
    owner: &'a mut O,
}

impl<'a, O: Owner + ?Sized> Fluent<'a, O> {
    /// See [`FluentBehavior::set_property`]
    pub fn set_property(self, name: &str, value: impl Into<Value>) -> Result<Self> {
        let Fluent { behavior, owner } = self;
        let owner = behavior.set_property(owner, name, value.into())?;
        Ok(Fluent { behavior, owner })
    }

    /// See [`FluentBehavior::unset_property`]
    pub fn unset_property(self, name: &str) -> Result<Self> {
        let Fluent { behavior, owner } = self;
        let owner = behavior.unset_property(owner, name)?;
        Ok(Fluent { behavior, owner })
    }

    /// See [`FluentBehavior::add_item_to`]
    pub fn add_item_to(self, name: &str, item: impl Into<Value>) -> Result<Self> {
        let Fluent { behavior, owner } = self;
        let owner = behavior.add_item_to(owner, name, item.into())?;
        Ok(Fluent { behavior, owner })
    }

    /// See [`FluentBehavior::add_item_to_with`]
    pub fn add_item_to_with(
        self,
        name: &str,
        item: impl Into<Value>,
        init_on_empty: bool,
    ) -> Result<Self> {
        let Fluent { behavior, owner } = self;
        let owner = behavior.add_item_to_with(owner, name, item.into(), init_on_empty)?;
        Ok(Fluent { behavior, owner })
    }

    /// Call a method by name, e.g. `setTitle` or `addTag`.
    ///
    /// Fails with [`FluentError::UnknownMethod`] when the name is not
    /// recognized, or with the owner's diagnostic when the property cannot be
    /// set.
    pub fn call(self, name: &str, args: &[Value]) -> Result<Self> {
        match self.behavior.dispatch(&mut *self.owner, name, args)? {
            Dispatch::Handled => Ok(self),
            Dispatch::Declined(reason) => Err(reason),
        }
    }

    /// Give the owner back
    pub fn into_inner(self) -> &'a mut O {
        self.owner
    }
}
