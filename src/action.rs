//! Method-name prefixes and the actions they select.
//!
//! A fluent method name is an action prefix followed by a property token:
//! `setTitle` is [`Action::Set`] on `title`, `addTag` is [`Action::Add`] on
//! `tag`. The prefix table is fixed; no prefix is a prefix of another, so the
//! lookup order does not matter.

use std::fmt;

/// A canonical fluent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append an item to a sequence property
    Add,
    /// Assign a property
    Set,
    /// Clear a property
    Unset,
}

/// Prefix-to-action table, checked in this order.
pub const ACTIONS: [(&str, Action); 3] = [
    ("add", Action::Add),
    ("set", Action::Set),
    ("unset", Action::Unset),
];

impl Action {
    /// The method-name prefix that selects this action
    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Set => "set",
            Action::Unset => "unset",
        }
    }

    /// Build the synthesized method name for a property token.
    ///
    /// ```rust
    /// use sugars_fluent::Action;
    ///
    /// assert_eq!(Action::Unset.method_name("title"), "unsetTitle");
    /// ```
    pub fn method_name(self, token: &str) -> String {
        format!("{}{}", self.prefix(), ucfirst(token))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Split a method name into its action and raw property token.
///
/// The token is the remainder after the prefix with its first character
/// lowercased. Returns `None` when no prefix matches or nothing follows it.
///
/// ```rust
/// use sugars_fluent::{resolve_method, Action};
///
/// assert_eq!(resolve_method("setFooBar"), Some((Action::Set, "fooBar".to_string())));
/// assert_eq!(resolve_method("unsetFoo"), Some((Action::Unset, "foo".to_string())));
/// assert_eq!(resolve_method("set"), None);
/// assert_eq!(resolve_method("getFoo"), None);
/// ```
pub fn resolve_method(name: &str) -> Option<(Action, String)> {
    ACTIONS.iter().find_map(|&(prefix, action)| {
        let rest = name.strip_prefix(prefix)?;
        if rest.is_empty() {
            None
        } else {
            Some((action, lcfirst(rest)))
        }
    })
}

/// Lowercase the first character of `s`. Only ASCII letters change.
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_lowercase()).chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of `s`. Only ASCII letters change.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase()).chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_resolve_to_their_actions() {
        assert_eq!(resolve_method("addTag"), Some((Action::Add, "tag".into())));
        assert_eq!(resolve_method("setTitle"), Some((Action::Set, "title".into())));
        assert_eq!(resolve_method("unsetTitle"), Some((Action::Unset, "title".into())));
    }

    #[test]
    fn unset_is_matched_as_a_whole_prefix() {
        // "unset..." must never be read as "un" + "set..."
        let (action, token) = resolve_method("unsetSetting").expect("resolves");
        assert_eq!(action, Action::Unset);
        assert_eq!(token, "setting");
    }

    #[test]
    fn bare_prefix_and_unknown_prefix_are_rejected() {
        assert_eq!(resolve_method("add"), None);
        assert_eq!(resolve_method("set"), None);
        assert_eq!(resolve_method("unset"), None);
        assert_eq!(resolve_method("remove"), None);
        assert_eq!(resolve_method(""), None);
    }

    #[test]
    fn case_helpers() {
        assert_eq!(lcfirst("FooBar"), "fooBar");
        assert_eq!(ucfirst("fooBar"), "FooBar");
        assert_eq!(lcfirst(""), "");
        assert_eq!(Action::Add.method_name("tagList"), "addTagList");
    }

    #[test]
    fn case_helpers_leave_non_ascii_alone() {
        assert_eq!(lcfirst("État"), "État");
        assert_eq!(ucfirst("état"), "état");
        assert_eq!(resolve_method("setÉtat"), Some((Action::Set, "État".into())));
    }
}
