/// Check whether `s` is a valid ASCII identifier (`[A-Za-z_$][A-Za-z0-9_$]*`).
///
/// # Examples
/// ```
/// use runtype_core::utils::is_identifier;
/// assert!(is_identifier("_t"));
/// assert!(!is_identifier("tcomb-react"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_identifier_start(first) && chars.all(is_identifier_part)
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Convert arbitrary text into a camelCase identifier.
///
/// Characters that cannot appear in an identifier act as word separators,
/// leading separators and digits are dropped. Returns `_` when nothing
/// usable remains.
///
/// # Examples
/// ```
/// use runtype_core::utils::to_identifier;
/// assert_eq!(to_identifier("tcomb-react"), "tcombReact");
/// assert_eq!(to_identifier("@scope/pkg"), "scopePkg");
/// assert_eq!(to_identifier("42"), "_");
/// ```
pub fn to_identifier(s: &str) -> String {
    let trimmed = s.trim_start_matches(|c: char| !is_identifier_start(c));

    let mut result = String::with_capacity(trimmed.len());
    let mut capitalize_next = false;
    for c in trimmed.chars() {
        if !is_identifier_part(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    if result.is_empty() {
        return "_".to_string();
    }
    result
}

/// Base name used for generated bindings: sanitized, without leading
/// underscores or trailing digits, so `_t2` and `t` share the base `t`.
pub fn uid_base(hint: &str) -> String {
    let ident = to_identifier(hint);
    let base = ident
        .trim_start_matches('_')
        .trim_end_matches(|c: char| c.is_ascii_digit());
    if base.is_empty() {
        return "ref".to_string();
    }
    base.to_string()
}
