//! Tests for the set / unset / add primitives

#[cfg(feature = "property-bag")]
mod primitives_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sugars_fluent::{FluentBehavior, FluentConfig, FluentError, PropertyBag};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn post() -> PropertyBag {
        PropertyBag::new("Post")
            .with_property("title", json!(null))
            .with_property("tags", json!([]))
            .with_property("body", json!("hello"))
            .with_property("count", json!(0))
            .with_read_only("id", json!(1))
    }

    fn behavior() -> FluentBehavior {
        FluentBehavior::new(FluentConfig::new().component("Post"))
    }

    #[test]
    fn test_primitives_set_property() {
        init_logging();
        let b = behavior();
        let mut bag = post();
        b.set_property(&mut bag, "title", json!("Hello")).unwrap();
        assert_eq!(bag.get("title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_primitives_set_read_only_fails() {
        let b = behavior();
        let mut bag = post();
        let err = b.set_property(&mut bag, "id", json!(2)).unwrap_err();
        assert!(err.is_read_only());
        assert_eq!(err.to_string(), "Setting read-only property: Post::id");
        assert_eq!(bag.get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_primitives_set_unknown_fails() {
        let b = behavior();
        let mut bag = post();
        let err = b.set_property(&mut bag, "undefinedThing", json!(1)).unwrap_err();
        assert!(err.is_unknown_property());
        assert_eq!(err.property(), Some("undefinedThing"));
    }

    #[test]
    fn test_primitives_chaining_returns_same_owner() {
        let b = behavior();
        let mut bag = post();
        let addr: *const PropertyBag = &bag;

        let owner = b.add_item_to(
            b.unset_property(b.set_property(&mut bag, "title", json!("t")).unwrap(), "body").unwrap(),
            "tags",
            json!("x"),
        )
        .unwrap();
        assert!(std::ptr::eq(owner, addr));

        assert_eq!(bag.get("title"), Some(&json!("t")));
        assert_eq!(bag.get("body"), Some(&json!(null)));
        assert_eq!(bag.get("tags"), Some(&json!(["x"])));
    }

    #[test]
    fn test_primitives_fluent_handle_chain() {
        let b = behavior();
        let mut bag = post();
        let owner = b
            .on(&mut bag)
            .set_property("title", "t")
            .and_then(|f| f.unset_property("body"))
            .and_then(|f| f.add_item_to("tags", 5))
            .unwrap()
            .into_inner();
        assert_eq!(owner.get("tags"), Some(&json!([5])));
    }

    #[test]
    fn test_primitives_append_preserves_order() {
        let b = behavior();
        let mut bag = post();
        b.add_item_to(&mut bag, "tags", json!(5)).unwrap();
        assert_eq!(bag.get("tags"), Some(&json!([5])));
        b.add_item_to(&mut bag, "tags", json!(6)).unwrap();
        assert_eq!(bag.get("tags"), Some(&json!([5, 6])));
    }

    #[test]
    fn test_primitives_append_initializes_empty_values() {
        let b = behavior();
        let mut bag = post();
        b.add_item_to(&mut bag, "title", json!("x")).unwrap();
        assert_eq!(bag.get("title"), Some(&json!(["x"])));

        b.add_item_to(&mut bag, "count", json!(1)).unwrap();
        assert_eq!(bag.get("count"), Some(&json!([1])));
    }

    #[test]
    fn test_primitives_append_to_scalar_fails_without_mutation() {
        let b = behavior();
        let mut bag = post();
        let err = b.add_item_to(&mut bag, "body", json!("x")).unwrap_err();
        assert!(err.is_invalid_operation());
        assert_eq!(bag.get("body"), Some(&json!("hello")));
    }

    #[test]
    fn test_primitives_append_without_init_policy() {
        let b = FluentBehavior::new(FluentConfig::new().init_arrays_if_empty(false));
        let mut bag = post();
        let err = b.add_item_to(&mut bag, "title", json!("x")).unwrap_err();
        assert!(err.is_invalid_operation());
        assert_eq!(bag.get("title"), Some(&json!(null)));

        // an explicit override wins over the configured policy
        b.add_item_to_with(&mut bag, "title", json!("x"), true).unwrap();
        assert_eq!(bag.get("title"), Some(&json!(["x"])));
    }

    #[test]
    fn test_primitives_append_checks_settable_first() {
        let b = behavior();
        let mut bag = post();
        assert!(b.add_item_to(&mut bag, "id", json!(1)).unwrap_err().is_read_only());
        assert!(b.add_item_to(&mut bag, "nope", json!(1)).unwrap_err().is_unknown_property());
    }

    #[test]
    fn test_primitives_append_to_write_only_reports_owner_error() {
        let b = behavior();
        let mut bag = post().with_write_only("secrets");
        let err = b.add_item_to(&mut bag, "secrets", json!(1)).unwrap_err();
        assert!(matches!(err, FluentError::WriteOnlyProperty { .. }));
    }

    #[test]
    fn test_primitives_unset_is_idempotent() {
        let b = behavior();
        let mut bag = post();
        b.unset_property(&mut bag, "body").unwrap();
        b.unset_property(&mut bag, "body").unwrap();
        assert_eq!(bag.get("body"), Some(&json!(null)));

        b.unset_property(&mut bag, "neverDeclared").unwrap();
    }
}
