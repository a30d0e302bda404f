use crate::utils::{is_identifier, to_identifier, uid_base};

#[test]
fn identifier_validity() {
    assert!(is_identifier("foo"));
    assert!(is_identifier("$Refinement"));
    assert!(is_identifier("_t2"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("2fast"));
    assert!(!is_identifier("first-name"));
}

#[test]
fn to_identifier_camel_cases_separators() {
    assert_eq!(to_identifier("tcomb-react"), "tcombReact");
    assert_eq!(to_identifier("lodash/fp"), "lodashFp");
    assert_eq!(to_identifier("a.b.c"), "aBC");
}

#[test]
fn to_identifier_drops_leading_junk() {
    assert_eq!(to_identifier("@scope/pkg"), "scopePkg");
    assert_eq!(to_identifier("../types"), "types");
    assert_eq!(to_identifier("3d-model"), "dModel");
}

#[test]
fn to_identifier_keeps_valid_names() {
    assert_eq!(to_identifier("assert"), "assert");
    assert_eq!(to_identifier("_extend"), "_extend");
}

#[test]
fn to_identifier_empty_fallback() {
    assert_eq!(to_identifier(""), "_");
    assert_eq!(to_identifier("123"), "_");
}

#[test]
fn uid_base_strips_underscores_and_counters() {
    assert_eq!(uid_base("t"), "t");
    assert_eq!(uid_base("_t"), "t");
    assert_eq!(uid_base("_t2"), "t");
    assert_eq!(uid_base("tcomb-react"), "tcombReact");
    assert_eq!(uid_base("___"), "ref");
}
