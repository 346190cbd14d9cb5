//! Tests for macros features

#[cfg(feature = "macros")]
mod macros_tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use sugars_fluent::macros::{attributes, owner_fields};
    use sugars_fluent::{Attribute, Component, FluentBehavior, FluentConfig, FluentError, Owner};

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Author {
        name: String,
    }

    #[derive(Debug, Default)]
    struct Article {
        id: u64,
        title: Option<String>,
        tags: Vec<String>,
        authors: Vec<Author>,
        views: u32,
    }

    owner_fields!(Article { title, tags, authors, views } read_only { id });

    fn behavior() -> FluentBehavior {
        FluentBehavior::new(
            FluentConfig::new()
                .component("Article")
                .attributes(attributes!["title", "id", "tag" => "tags", "author" => "authors", "views"]),
        )
    }

    #[test]
    fn test_macros_attributes_literal() {
        let spec = attributes!["title", "tag" => "tags",];
        assert_eq!(
            spec.iter().cloned().collect::<Vec<_>>(),
            vec![
                Attribute::Bare("title".into()),
                Attribute::Aliased {
                    alias: "tag".into(),
                    property: "tags".into()
                },
            ]
        );
        assert!(attributes![].is_wildcard());
    }

    #[test]
    fn test_macros_owner_fields_capabilities() {
        let article = Article::default();
        assert!(article.can_set_property("title"));
        assert!(!article.can_set_property("id"));
        assert!(article.can_get_property("id"));
        assert!(!article.can_get_property("missing"));
        assert_eq!(article.get_property("views").unwrap(), json!(0));
        assert_eq!(article.property_names().len(), 5);
    }

    #[test]
    fn test_macros_owner_fields_through_component() {
        let mut article = Component::new("Article", Article::default()).with_behavior(behavior());
        article
            .invoke("setTitle", &[json!("Fluent")])
            .unwrap()
            .invoke("addTag", &[json!("rust")])
            .unwrap()
            .invoke("addAuthor", &[json!({"name": "Ada"})])
            .unwrap()
            .invoke("setViews", &[json!(3)])
            .unwrap();

        let owner = article.owner();
        assert_eq!(owner.title.as_deref(), Some("Fluent"));
        assert_eq!(owner.tags, vec!["rust".to_string()]);
        assert_eq!(owner.authors, vec![Author { name: "Ada".into() }]);
        assert_eq!(owner.views, 3);
    }

    #[test]
    fn test_macros_owner_fields_read_only_and_unset() {
        let b = behavior();
        let mut article = Article {
            id: 7,
            title: Some("t".into()),
            ..Default::default()
        };
        let err = b.on(&mut article).call("setId", &[json!(8)]).err().unwrap();
        assert!(err.is_read_only());
        assert_eq!(err.to_string(), "Setting read-only property: Article::id");

        b.unset_property(&mut article, "title").unwrap();
        b.unset_property(&mut article, "title").unwrap();
        assert_eq!(article.title, None);
        assert_eq!(article.id, 7);
    }

    #[test]
    fn test_macros_owner_fields_conversion_error() {
        let b = behavior();
        let mut article = Article::default();
        let err = b.set_property(&mut article, "views", json!("many")).unwrap_err();
        assert!(matches!(err, FluentError::Conversion { .. }));
        assert_eq!(article.views, 0);
    }

    #[test]
    fn test_macros_owner_fields_append_to_scalar_field() {
        let b = behavior();
        let mut article = Article {
            views: 4,
            ..Default::default()
        };
        assert!(b.add_item_to(&mut article, "views", json!(1)).unwrap_err().is_invalid_operation());
        assert_eq!(article.views, 4);
    }
}
