//! Declared attributes: the allow-list and alias table.
//!
//! An [`AttributeSpec`] holds bare names (the property is reachable under its
//! own name) and aliases (the property is reachable only under the alias).
//! An empty spec permits every property with no aliasing.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One declared attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// Property reachable under its own name
    Bare(String),
    /// Property reachable only under `alias`
    Aliased {
        /// Fluent-method fragment
        alias: String,
        /// Canonical property name
        property: String,
    },
}

impl Attribute {
    /// The canonical property this entry points at
    pub fn property(&self) -> &str {
        match self {
            Attribute::Bare(property) => property,
            Attribute::Aliased { property, .. } => property,
        }
    }

    /// The token a fluent method name must carry to reach this entry
    pub fn token(&self) -> &str {
        match self {
            Attribute::Bare(property) => property,
            Attribute::Aliased { alias, .. } => alias,
        }
    }
}

/// Ordered allow-list and alias table.
///
/// ```rust
/// use sugars_fluent::AttributeSpec;
///
/// let spec = AttributeSpec::new().bare("title").alias("tag", "tags");
/// assert_eq!(spec.resolve_property("title").as_deref(), Some("title"));
/// assert_eq!(spec.resolve_property("tag").as_deref(), Some("tags"));
/// // the canonical name is not a fluent token once an alias was assigned
/// assert_eq!(spec.resolve_property("tags"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSpec {
    entries: Vec<Attribute>,
}

impl AttributeSpec {
    /// Empty spec: every property permitted, no aliasing
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare attribute
    pub fn bare(mut self, property: impl Into<String>) -> Self {
        self.push_bare(property);
        self
    }

    /// Add an alias for a property
    pub fn alias(mut self, alias: impl Into<String>, property: impl Into<String>) -> Self {
        self.push_alias(alias, property);
        self
    }

    /// Append a bare attribute in place
    pub fn push_bare(&mut self, property: impl Into<String>) {
        self.entries.push(Attribute::Bare(property.into()));
    }

    /// Insert an alias in place. A repeated alias replaces the earlier mapping.
    ///
    /// An integer-like alias (`"0"`, `"12"`) is a position, not an alias: the
    /// property is appended as a bare entry, the same way a map key is read.
    pub fn push_alias(&mut self, alias: impl Into<String>, property: impl Into<String>) {
        let alias = alias.into();
        let property = property.into();
        if is_positional_key(&alias) {
            self.push_bare(property);
            return;
        }
        let existing = self.entries.iter_mut().find(
            |entry| matches!(entry, Attribute::Aliased { alias: a, .. } if *a == alias),
        );
        match existing {
            Some(Attribute::Aliased { property: p, .. }) => *p = property,
            _ => self.entries.push(Attribute::Aliased { alias, property }),
        }
    }

    /// True when no attributes are declared (wildcard mode)
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no attributes are declared
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate declared entries in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Translate a raw property token into a canonical property name.
    ///
    /// Order: an alias key wins; then a bare entry; a token that names a
    /// property which has an alias is rejected; anything else is rejected.
    pub fn resolve_property(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        if self.is_wildcard() {
            return Some(token.to_string());
        }

        let aliased = self.entries.iter().find_map(|entry| match entry {
            Attribute::Aliased { alias, property } if alias == token => Some(property),
            _ => None,
        });
        if let Some(property) = aliased {
            return Some(property.clone());
        }

        let declared_bare = self
            .entries
            .iter()
            .any(|entry| matches!(entry, Attribute::Bare(property) if property == token));
        if declared_bare {
            return Some(token.to_string());
        }

        None
    }
}

impl<'a> IntoIterator for &'a AttributeSpec {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Attribute> for AttributeSpec {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut spec = AttributeSpec::new();
        for entry in iter {
            match entry {
                Attribute::Bare(property) => spec.push_bare(property),
                Attribute::Aliased { alias, property } => spec.push_alias(alias, property),
            }
        }
        spec
    }
}

impl<S: Into<String>> From<Vec<S>> for AttributeSpec {
    fn from(properties: Vec<S>) -> Self {
        properties
            .into_iter()
            .map(|p| Attribute::Bare(p.into()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<hashbrown::HashMap<K, V>> for AttributeSpec {
    /// Every key is treated as an alias, integer-like keys as positions.
    fn from(map: hashbrown::HashMap<K, V>) -> Self {
        map.into_iter()
            .map(|(k, v)| entry_from_key(k.into(), v.into()))
            .collect()
    }
}

/// Integer-like keys (`"0"`, `"12"`, `"-3"`) denote positional, bare entries.
fn is_positional_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => key == "0",
        [first, rest @ ..] => {
            first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit)
        }
    }
}

fn entry_from_key(key: String, property: String) -> Attribute {
    if is_positional_key(&key) {
        Attribute::Bare(property)
    } else {
        Attribute::Aliased {
            alias: key,
            property,
        }
    }
}

// Serializes to a sequence when every entry is bare, otherwise to an object
// whose bare entries are keyed by their position.
impl Serialize for AttributeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let all_bare = self
            .entries
            .iter()
            .all(|entry| matches!(entry, Attribute::Bare(_)));
        if all_bare {
            let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
            for entry in &self.entries {
                seq.serialize_element(entry.property())?;
            }
            return seq.end();
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (position, entry) in self.entries.iter().enumerate() {
            match entry {
                Attribute::Bare(property) => map.serialize_entry(&position.to_string(), property)?,
                Attribute::Aliased { alias, property } => map.serialize_entry(alias, property)?,
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Index(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for AttributeSpec {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = AttributeSpec;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, a sequence of property names, or an alias-to-property map")
            }

            #[inline]
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(AttributeSpec::new())
            }

            #[inline]
            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(AttributeSpec::new())
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut spec = AttributeSpec::new();
                while let Some(property) = seq.next_element::<String>()? {
                    spec.push_bare(property);
                }
                Ok(spec)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut spec = AttributeSpec::new();
                while let Some((key, property)) = map.next_entry::<RawKey, String>()? {
                    match key {
                        RawKey::Index(_) => spec.push_bare(property),
                        RawKey::Name(name) => match entry_from_key(name, property) {
                            Attribute::Bare(property) => spec.push_bare(property),
                            Attribute::Aliased { alias, property } => {
                                spec.push_alias(alias, property)
                            }
                        },
                    }
                }
                Ok(spec)
            }
        }

        de.deserialize_any(V)
    }
}
