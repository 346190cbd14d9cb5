//! Tests for configuration loading and attribute spec formats

mod config_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sugars_fluent::{Attribute, AttributeSpec, FluentConfig};

    #[test]
    fn test_config_from_json_mixed_attributes() {
        let config = FluentConfig::from_json(
            r#"{
                "component": "Article",
                "attributes": {"0": "title", "tag": "tags", "1": "body"},
                "initArraysIfEmpty": false
            }"#,
        )
        .unwrap();

        assert_eq!(config.component, "Article");
        assert!(!config.init_arrays_if_empty);
        let spec = &config.attributes;
        assert_eq!(spec.resolve_property("title").as_deref(), Some("title"));
        assert_eq!(spec.resolve_property("body").as_deref(), Some("body"));
        assert_eq!(spec.resolve_property("tag").as_deref(), Some("tags"));
        assert_eq!(spec.resolve_property("tags"), None);
    }

    #[test]
    fn test_config_attribute_list_and_null() {
        let spec: AttributeSpec = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(
            spec.iter().cloned().collect::<Vec<_>>(),
            vec![Attribute::Bare("a".into()), Attribute::Bare("b".into())]
        );

        let wildcard: AttributeSpec = serde_json::from_value(json!(null)).unwrap();
        assert!(wildcard.is_wildcard());
    }

    #[test]
    fn test_config_attribute_spec_serialization_shape() {
        let bare_only = AttributeSpec::new().bare("a").bare("b");
        assert_eq!(serde_json::to_value(&bare_only).unwrap(), json!(["a", "b"]));

        let mixed = AttributeSpec::new().bare("a").alias("tag", "tags");
        assert_eq!(serde_json::to_value(&mixed).unwrap(), json!({"0": "a", "tag": "tags"}));

        let back: AttributeSpec = serde_json::from_value(json!({"0": "a", "tag": "tags"})).unwrap();
        assert_eq!(back.resolve_property("a").as_deref(), Some("a"));
        assert_eq!(back.resolve_property("tag").as_deref(), Some("tags"));
    }

    #[test]
    fn test_config_rejects_non_string_property() {
        assert!(serde_json::from_value::<AttributeSpec>(json!({"tag": 3})).is_err());
        assert!(FluentConfig::from_json(r#"{"attributes": 5}"#).is_err());
    }

    #[test]
    fn test_config_to_json_reloads() {
        let config = FluentConfig::new()
            .component("Post")
            .attributes(vec!["title", "body"])
            .init_arrays_if_empty(false);
        let reloaded = FluentConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_config_integer_like_alias_survives_json_cycle() {
        let config = FluentConfig::new().attributes(AttributeSpec::new().alias("1", "title"));
        let before = (
            config.attributes.resolve_property("1"),
            config.attributes.resolve_property("title"),
        );

        let back = FluentConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
        assert_eq!(
            (back.attributes.resolve_property("1"), back.attributes.resolve_property("title")),
            before
        );
    }

    #[test]
    fn test_config_positional_alias_never_duplicates_keys() {
        let spec = AttributeSpec::new().bare("a").alias("0", "b").alias("tag", "tags");
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value, json!({"0": "a", "1": "b", "tag": "tags"}));

        let back: AttributeSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_config_from_hashbrown_map() {
        let mut map = hashbrown::HashMap::new();
        map.insert("tag", "tags");
        map.insert("0", "title");
        let spec = AttributeSpec::from(map);
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.resolve_property("title").as_deref(), Some("title"));
        assert_eq!(spec.resolve_property("tag").as_deref(), Some("tags"));
    }
}
