use indexmap::IndexMap;

use crate::{
    Combinator, GlobalTypes, Primitive, is_magic_type, is_reserved_name, parse_globals,
};

#[test]
fn combinator_names_match_library_members() {
    assert_eq!(Combinator::List.name(), "list");
    assert_eq!(Combinator::Enums.name(), "enums");
    assert_eq!(Combinator::Interface.name(), "interface");
    assert_eq!(Combinator::Irreducible.name(), "irreducible");
}

#[test]
fn void_and_null_share_nil() {
    assert_eq!(Primitive::Nil.name(), "Nil");
    assert_eq!(Primitive::Any.name(), "Any");
}

#[test]
fn reserved_names() {
    assert!(is_reserved_name("$Refinement"));
    assert!(is_reserved_name("$Reify"));
    assert!(!is_reserved_name("Refinement"));
    assert!(!is_reserved_name("$Shape"));
}

#[test]
fn magic_types() {
    assert!(is_magic_type("$Keys"));
    assert!(is_magic_type("$ObjMap"));
    assert!(!is_magic_type("$Exact"));
}

#[test]
fn globals_merge_sets_in_order() {
    let mut react = IndexMap::new();
    react.insert("ReactClass".to_string(), true);
    let mut dom = IndexMap::new();
    dom.insert("HTMLElement".to_string(), true);
    dom.insert("ReactClass".to_string(), true);

    let globals = GlobalTypes::from_sets([react, dom]);

    assert_eq!(globals.len(), 2);
    assert_eq!(
        globals.iter().collect::<Vec<_>>(),
        vec!["ReactClass", "HTMLElement"]
    );
}

#[test]
fn globals_register_keys_regardless_of_value() {
    let globals = parse_globals(r#"[{"Foo": false}, {"Bar": true}]"#).unwrap();

    assert!(globals.contains("Foo"));
    assert!(globals.contains("Bar"));
    assert!(!globals.contains("Baz"));
}

#[test]
fn globals_reject_non_list_json() {
    assert!(parse_globals(r#"{"Foo": true}"#).is_err());
}

#[test]
fn globals_builder() {
    let globals = GlobalTypes::new().with("Date").with("Date");

    assert_eq!(globals.len(), 1);
    assert!(!globals.is_empty());
    assert!(GlobalTypes::default().is_empty());
}

#[test]
fn globals_from_iterator() {
    let globals: GlobalTypes = ["A", "B"].into_iter().collect();
    assert!(globals.contains("A"));
    assert!(globals.contains("B"));
}
