//! Macros for declaring attributes and typed owners.
//!
//! - [`attributes!`](self::attributes) builds an [`AttributeSpec`](crate::AttributeSpec)
//!   from literal syntax, mixing bare names and `alias => property` pairs.
//! - [`owner_fields!`](self::owner_fields) implements [`Owner`](crate::Owner) for a
//!   plain struct from a list of field names, with no runtime reflection.

/// Build an [`AttributeSpec`](crate::AttributeSpec) from literals.
///
/// # Example
///
/// ```rust
/// use sugars_fluent::macros::attributes;
///
/// let spec = attributes!["title", "tag" => "tags", "body"];
/// assert_eq!(spec.len(), 3);
/// assert_eq!(spec.resolve_property("tag").as_deref(), Some("tags"));
/// assert!(attributes![].is_wildcard());
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __sf_attributes {
    [] => {
        $crate::AttributeSpec::new()
    };
    [$($entries:tt)+] => {{
        let mut spec = $crate::AttributeSpec::new();
        $crate::__sf_attributes_push!(spec; $($entries)+);
        spec
    }};
}

/// Entry muncher behind `attributes!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __sf_attributes_push {
    ($spec:ident;) => {};
    ($spec:ident; $alias:literal => $property:literal $(, $($rest:tt)*)?) => {
        $spec.push_alias($alias, $property);
        $crate::__sf_attributes_push!($spec; $($($rest)*)?);
    };
    ($spec:ident; $property:literal $(, $($rest:tt)*)?) => {
        $spec.push_bare($property);
        $crate::__sf_attributes_push!($spec; $($($rest)*)?);
    };
}

/// Implement [`Owner`](crate::Owner) for a struct by listing its fields.
///
/// Writable fields must implement `Serialize`, `DeserializeOwned` and
/// `Default` (unset restores the default). Fields listed under `read_only`
/// only need `Serialize`. Errors name the struct type.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sugars_fluent::macros::owner_fields;
/// use sugars_fluent::{FluentBehavior, FluentConfig};
///
/// #[derive(Default)]
/// struct Post {
///     id: u64,
///     title: Option<String>,
///     tags: Vec<String>,
/// }
///
/// owner_fields!(Post { title, tags } read_only { id });
///
/// let behavior = FluentBehavior::new(FluentConfig::new().component("Post"));
/// let mut post = Post::default();
/// behavior
///     .on(&mut post)
///     .call("setTitle", &[json!("Hello")])?
///     .call("addTags", &[json!("rust")])?;
/// assert_eq!(post.title.as_deref(), Some("Hello"));
/// assert_eq!(post.tags, vec!["rust".to_string()]);
/// # Ok::<(), sugars_fluent::FluentError>(())
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __sf_owner_fields {
    (
        $ty:ty { $($field:ident),+ $(,)? }
        $( read_only { $($ro:ident),+ $(,)? } )?
    ) => {
        impl $crate::Owner for $ty {
            fn can_set_property(&self, name: &str) -> bool {
                [$(stringify!($field)),+].contains(&name)
            }

            fn can_get_property(&self, name: &str) -> bool {
                $($( if name == stringify!($ro) { return true; } )+)?
                self.can_set_property(name)
            }

            fn get_property(&self, name: &str) -> $crate::Result<$crate::__private::Value> {
                $(
                    if name == stringify!($field) {
                        return $crate::__private::to_value(&self.$field, stringify!($ty), name);
                    }
                )+
                $($(
                    if name == stringify!($ro) {
                        return $crate::__private::to_value(&self.$ro, stringify!($ty), name);
                    }
                )+)?
                Err($crate::FluentError::unknown_property(stringify!($ty), name))
            }

            fn set_property(
                &mut self,
                name: &str,
                value: $crate::__private::Value,
            ) -> $crate::Result<()> {
                $(
                    if name == stringify!($field) {
                        self.$field = $crate::__private::from_value(value, stringify!($ty), name)?;
                        return Ok(());
                    }
                )+
                $($(
                    if name == stringify!($ro) {
                        return Err($crate::FluentError::read_only(stringify!($ty), name));
                    }
                )+)?
                Err($crate::FluentError::unknown_property(stringify!($ty), name))
            }

            fn unset_property(&mut self, name: &str) -> $crate::Result<()> {
                $(
                    if name == stringify!($field) {
                        self.$field = ::core::default::Default::default();
                        return Ok(());
                    }
                )+
                $($(
                    if name == stringify!($ro) {
                        return Err($crate::FluentError::read_only(stringify!($ty), name));
                    }
                )+)?
                Ok(())
            }

            fn property_names(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![$(stringify!($field).to_string(),)+ $($(stringify!($ro).to_string(),)+)?]
            }
        }
    };
}

#[doc(inline)]
pub use crate::__sf_attributes as attributes;

#[doc(inline)]
pub use crate::__sf_owner_fields as owner_fields;

/// Support code for macro expansions.
#[doc(hidden)]
pub mod __private {
    use crate::error::{FluentError, Result};
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    pub use serde_json::Value;

    /// Serialize a typed field into a dynamic value
    pub fn to_value<T: Serialize>(field: &T, component: &str, property: &str) -> Result<Value> {
        serde_json::to_value(field)
            .map_err(|source| FluentError::conversion(component, property, source))
    }

    /// Deserialize a dynamic value into a typed field
    pub fn from_value<T: DeserializeOwned>(
        value: Value,
        component: &str,
        property: &str,
    ) -> Result<T> {
        serde_json::from_value(value)
            .map_err(|source| FluentError::conversion(component, property, source))
    }
}
