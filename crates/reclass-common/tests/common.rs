use super::*;

#[test]
fn target_names_map_to_dialects() {
    assert_eq!(
        TargetDialect::from_target_name("es2015"),
        Some(TargetDialect::InlineFields)
    );
    assert_eq!(
        TargetDialect::from_target_name("ES6"),
        Some(TargetDialect::InlineFields)
    );
    assert_eq!(
        TargetDialect::from_target_name("es2017"),
        Some(TargetDialect::DeclaredFields)
    );
    assert_eq!(
        TargetDialect::from_target_name("ES_Next"),
        Some(TargetDialect::DeclaredFields)
    );
    assert_eq!(
        TargetDialect::from_target_name("declared-fields"),
        Some(TargetDialect::DeclaredFields)
    );
    assert_eq!(TargetDialect::from_target_name("es5"), None);
}

#[test]
fn default_options_match_legacy_conventions() {
    let options = ConvertOptions::default();
    assert_eq!(options.constructor_key, "init");
    assert_eq!(options.global_object, "window");
    assert_eq!(options.target, TargetDialect::InlineFields);
    assert!(!options.extended);
    assert_eq!(options.extended_namespace(), None);
}

#[test]
fn empty_extended_namespace_is_absent() {
    let options = ConvertOptions::default().with_extends("");
    assert!(options.extended);
    assert_eq!(options.extended_namespace(), None);

    let options = ConvertOptions::default().with_unnamed_extends();
    assert!(options.extended);
    assert_eq!(options.extended_namespace(), None);

    let options = ConvertOptions::default().with_extends("lib.Base");
    assert_eq!(options.extended_namespace(), Some("lib.Base"));
}

#[test]
fn dialect_serializes_by_variant_name() {
    let json = serde_json::to_string(&TargetDialect::DeclaredFields).expect("serialize");
    assert_eq!(json, "\"DeclaredFields\"");
}

#[test]
fn dialect_names_round_trip() {
    for dialect in [TargetDialect::InlineFields, TargetDialect::DeclaredFields] {
        assert_eq!(TargetDialect::from_target_name(dialect.as_str()), Some(dialect));
    }
    assert_eq!(TargetDialect::InlineFields.as_str(), "inline");
    assert_eq!(TargetDialect::DeclaredFields.as_str(), "declared");
}
