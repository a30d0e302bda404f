use rowan::{TextRange, TextSize};

use super::{Expr, Identifier, PrimitiveType, QualifiedName};

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

fn qualified(names: &[&str]) -> QualifiedName {
    let mut offset = 0;
    let segments = names
        .iter()
        .map(|name| {
            let len = name.len() as u32;
            let id = Identifier::new(*name, range(offset, offset + len));
            offset += len + 1;
            id
        })
        .collect();
    QualifiedName { segments }
}

#[test]
fn qualified_name_to_member_chain() {
    let name = qualified(&["a", "b", "c"]);

    assert_eq!(
        name.to_expr(),
        Expr::ident("a").member("b").member("c")
    );
    assert_eq!(name.to_string(), "a.b.c");
    assert_eq!(name.as_simple(), None);
    assert_eq!(name.last().name, "c");
    assert_eq!(name.span(), range(0, 5));
}

#[test]
fn simple_name() {
    let name = qualified(&["isPositive"]);

    assert_eq!(name.to_expr(), Expr::ident("isPositive"));
    assert_eq!(name.as_simple(), Some("isPositive"));
}

#[test]
fn primitive_keywords_roundtrip() {
    for keyword in ["number", "string", "boolean", "void", "null", "any", "mixed", "empty", "symbol"] {
        let p = PrimitiveType::from_keyword(keyword).unwrap();
        assert_eq!(p.keyword(), Some(keyword));
    }
    assert_eq!(PrimitiveType::from_keyword("Number"), None);
    assert_eq!(PrimitiveType::Existential.keyword(), None);
}

#[test]
fn mentions_finds_references() {
    let expr = Expr::ident("_t")
        .member("list")
        .call(vec![Expr::ident("Foo")]);

    assert!(expr.mentions("_t"));
    assert!(expr.mentions("Foo"));
    assert!(!expr.mentions("list"));
}

#[test]
fn mentions_respects_function_parameter() {
    let predicate = Expr::function(
        Some("n"),
        Expr::ident("n").strict_eq(Expr::Number("1".into())),
    );

    assert!(!predicate.mentions("n"));
}

#[test]
fn mentions_looks_through_fallbacks() {
    let expr = Expr::ident("_m")
        .member("A")
        .or(Expr::ident("_t").member("Any"));

    assert!(expr.mentions("_t"));
    assert!(expr.mentions("_m"));
    assert!(!expr.mentions("A"));
}
