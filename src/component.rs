//! A host that owns a value and routes unknown method names to attached
//! behaviors.

use crate::behavior::{Behavior, Dispatch};
use crate::config::DEFAULT_COMPONENT;
use crate::error::{FluentError, Result};
use serde_json::Value;

/// An owner together with its attached behaviors.
///
/// ```rust
/// # #[cfg(feature = "property-bag")]
/// # {
/// use serde_json::json;
/// use sugars_fluent::{AttributeSpec, Component, FluentBehavior, FluentConfig, PropertyBag};
///
/// let bag = PropertyBag::new("Post").with_property("tags", json!([]));
/// let mut post = Component::new("Post", bag).with_behavior(FluentBehavior::new(
///     FluentConfig::new().component("Post").attributes(AttributeSpec::new().alias("tag", "tags")),
/// ));
///
/// post.invoke("addTag", &[json!("a")])?.invoke("addTag", &[json!("b")])?;
/// assert_eq!(post.owner().get("tags"), Some(&json!(["a", "b"])));
/// assert!(post.invoke("addTags", &[json!("c")]).unwrap_err().is_unknown_method());
/// # }
/// # Ok::<(), sugars_fluent::FluentError>(())
/// ```
pub struct Component<O> {
    name: String,
    owner: O,
    behaviors: Vec<Box<dyn Behavior<O>>>,
}

impl<O> Component<O> {
    /// Wrap `owner` with no behaviors attached
    pub fn new(name: impl Into<String>, owner: O) -> Self {
        Self {
            name: name.into(),
            owner,
            behaviors: Vec::new(),
        }
    }

    /// Attach a behavior; earlier behaviors get the first chance at a call
    pub fn attach<B>(&mut self, behavior: B) -> &mut Self
    where
        B: Behavior<O> + 'static,
    {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Builder-style [`attach`](Self::attach)
    pub fn with_behavior<B>(mut self, behavior: B) -> Self
    where
        B: Behavior<O> + 'static,
    {
        self.attach(behavior);
        self
    }

    /// Component name used in errors raised by the host itself
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of attached behaviors
    #[inline]
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    /// Borrow the owner
    #[inline]
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Borrow the owner mutably
    #[inline]
    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    /// Detach all behaviors and return the owner
    pub fn into_owner(self) -> O {
        self.owner
    }

    /// Whether any attached behavior recognizes `name`
    pub fn has_method(&self, name: &str) -> bool {
        self.behaviors.iter().any(|b| b.has_method(name))
    }

    /// Call `name` with `args`, returning the component for chaining.
    ///
    /// Each behavior that recognizes the name is tried in attach order. When
    /// none handles it, the first decline reason is returned, or
    /// [`FluentError::UnknownMethod`] when nothing recognized the name.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<&mut Self> {
        let mut declined = None;
        let mut handled = false;
        for behavior in &self.behaviors {
            if !behavior.has_method(name) {
                continue;
            }
            match behavior.dispatch(&mut self.owner, name, args)? {
                Dispatch::Handled => {
                    handled = true;
                    break;
                }
                Dispatch::Declined(reason) => {
                    declined.get_or_insert(reason);
                }
            }
        }

        if handled {
            return Ok(self);
        }
        log::debug!("{}: no behavior handled {name}", self.name);
        Err(declined.unwrap_or_else(|| FluentError::unknown_method(&self.name, name)))
    }
}

impl<O: Default> Default for Component<O> {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT, O::default())
    }
}

impl<O: std::fmt::Debug> std::fmt::Debug for Component<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("behaviors", &self.behaviors.len())
            .finish()
    }
}
