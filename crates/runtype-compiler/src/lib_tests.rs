use runtype_core::GlobalTypes;

use crate::{Config, Error, transform};

#[test]
fn transform_one_shot() {
    let out = transform("// @tcomb\ntype A = number;\n", &Config::new()).unwrap();
    insta::assert_snapshot!(out, @r"
    import _t from 'tcomb';

    const A = _t.Number;
    ");
}

#[test]
fn transform_reports_parse_errors() {
    let err = transform("// @tcomb\ntype A = ;\n", &Config::new()).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[test]
fn transform_without_directive_ignores_parse_errors() {
    let source = "type A = { ...B, c: number };\nconst x = 1;\n";
    assert_eq!(transform(source, &Config::new()).unwrap(), source);
}

#[test]
fn config_defaults() {
    let config = Config::new();
    assert_eq!(config.library, "tcomb");
    assert_eq!(config.directive, "@tcomb");
    assert!(config.globals.is_empty());
}

#[test]
fn config_from_json() {
    let config = Config::from_json(
        r#"{
            "globals": [{ "ReactElement": true }, { "Buffer": true, "Stream": false }],
            "library": "tcomb-lite",
            "directive": "@runtime"
        }"#,
    )
    .unwrap();

    assert_eq!(config.library, "tcomb-lite");
    assert_eq!(config.directive, "@runtime");
    assert!(config.globals.contains("ReactElement"));
    assert!(config.globals.contains("Buffer"));
    assert!(config.globals.contains("Stream"));
    assert!(!config.globals.contains("Date"));
}

#[test]
fn config_partial_json_keeps_defaults() {
    let config = Config::from_json(r#"{ "library": "tcomb-lite", "unknown": 1 }"#).unwrap();
    assert_eq!(config.library, "tcomb-lite");
    assert_eq!(config.directive, "@tcomb");
}

#[test]
fn config_invalid_json() {
    let err = Config::from_json(r#"{ "globals": "nope" }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration: "));
}

#[test]
fn config_builder() {
    let config = Config::new()
        .globals(GlobalTypes::new().with("Buffer"))
        .library("my-tcomb")
        .directive("@check");
    assert_eq!(config.library, "my-tcomb");
    assert_eq!(config.directive, "@check");
    assert!(config.globals.contains("Buffer"));
}

#[test]
fn error_display() {
    insta::assert_snapshot!(Error::RecursionLimitExceeded.to_string(), @"recursion limit exceeded");
}
