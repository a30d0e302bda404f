use crate::{Config, Error, Unit};

impl<'src> Unit<'src> {
    #[track_caller]
    pub fn expect_transformed(source: &'src str) -> String {
        Self::expect_transformed_with(source, &Config::new())
    }

    #[track_caller]
    pub fn expect_transformed_with(source: &'src str, config: &Config) -> String {
        let unit = match Unit::parse(source).and_then(|unit| unit.transform(config)) {
            Ok(unit) => unit,
            Err(Error::ParseError(diagnostics)) | Err(Error::TransformError(diagnostics)) => {
                panic!(
                    "Expected valid unit, got error:\n{}",
                    diagnostics.render(source)
                );
            }
            Err(err) => panic!("Expected valid unit, got error: {err}"),
        };
        unit.print()
    }

    #[track_caller]
    pub fn expect_invalid(source: &'src str) -> String {
        match Unit::parse(source).and_then(|unit| unit.transform(&Config::new())) {
            Ok(unit) => panic!("Expected invalid unit, got:\n{}", unit.print()),
            Err(Error::ParseError(diagnostics)) | Err(Error::TransformError(diagnostics)) => {
                diagnostics.to_string()
            }
            Err(err) => err.to_string(),
        }
    }
}

#[test]
fn untouched_without_directive() {
    let source = "type A = number;\n";
    let unit = Unit::parse(source).unwrap().transform(&Config::new()).unwrap();
    assert_eq!(unit.print(), "type A = number;\n");
    assert_eq!(unit.source(), source);
}

#[test]
fn parse_error_is_reported() {
    let unit = Unit::parse("// @tcomb\ntype A = ;").unwrap();
    assert!(!unit.is_valid());
    let err = unit.transform(&Config::new()).unwrap_err();
    let Error::ParseError(diagnostics) = err else {
        panic!("expected a parse error");
    };
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 19..20: expected a type");
}

#[test]
fn unit_without_directive_passes_unsupported_syntax() {
    let source = "type A = { ...B, c: number };\nconst x = 1;\n";
    let unit = Unit::parse(source).unwrap();
    assert!(!unit.is_valid());
    let unit = unit.transform(&Config::new()).unwrap();
    assert_eq!(unit.print(), source);
    assert!(unit.diagnostics().has_errors());
}

#[test]
fn unit_without_directive_keeps_formatting() {
    let source = "type A = number\nconst x = {a:1}\n\n\n// trailing\n";
    let unit = Unit::parse(source).unwrap().transform(&Config::new()).unwrap();
    assert_eq!(unit.print(), source);
}

#[test]
fn transform_error_is_reported() {
    let err = Unit::parse("// @tcomb\ntype $Refinement = number;")
        .unwrap()
        .transform(&Config::new())
        .unwrap_err();
    assert!(matches!(err, Error::TransformError(_)));
}

#[test]
fn rendered_with_source() {
    let source = "// @tcomb\ntype S = symbol;\n";
    let err = Unit::parse(source)
        .unwrap()
        .transform(&Config::new())
        .unwrap_err();
    let Error::TransformError(diagnostics) = err else {
        panic!("expected a transform error");
    };
    let rendered = diagnostics.render(source);
    assert!(rendered.contains("unsupported type annotation: symbol type"));
    assert!(rendered.contains("type S = symbol;"));
}

#[test]
fn recursion_fuel_is_enforced() {
    let source = format!("type A = {}number{};", "(".repeat(64), ")".repeat(64));
    let err = Unit::parse_with_recursion_fuel(&source, Some(8)).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
}
