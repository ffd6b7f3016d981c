//! Common utilities shared by the resolver, emitter and printer.

use super::api::PropertyDef;

/// Check if a name needs quoting to be used as a property or enum member key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in TypeScript double-quoted string literals.
/// Escapes backslashes, double quotes, line terminators and other control
/// characters.
pub fn escape_ts_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// Quote a name if needed for use as a property key or enum member name.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", escape_ts_string(name))
    } else {
        name.to_string()
    }
}

/// Member name for an enum literal.
///
/// TypeScript rejects numeric enum member names even when quoted, so numeric
/// literals get a `_` prefix; the member value keeps the literal unchanged.
pub fn enum_member_name(literal: &str) -> String {
    if literal.parse::<f64>().is_ok() {
        format!("_{literal}")
    } else {
        literal.to_string()
    }
}

/// Map a model name to a TypeScript type identifier.
/// - Names that already are identifiers are kept verbatim
/// - Otherwise any character other than alphanumerics, `_` and `$` separates
///   words, and each word is capitalized at its first letter
/// - Prepends `_` if the result starts with a digit
pub fn to_type_identifier(name: &str) -> String {
    if !needs_quoting(name) {
        return name.to_string();
    }

    let mut result = String::new();
    for word in name
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars);
        }
    }

    if result.is_empty() {
        return "_Empty".to_string();
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

/// Canonicalize a parameter name into a single lower-camel identifier.
/// - Any character other than alphanumerics and `$` separates words
///   (whitespace, `_`, `-`, `.`, brackets, ...)
/// - The first word is lowercased at its first letter, later words capitalized
/// - All-caps words are lowercased after their first letter (`PAGE_SIZE` -> `pageSize`)
/// - Prepends `_` if the result starts with a digit
pub fn to_lower_camel(name: &str) -> String {
    let mut result = String::new();
    for word in name
        .split(|c: char| !(c.is_alphanumeric() || c == '$'))
        .filter(|w| !w.is_empty())
    {
        let all_caps = !word.chars().any(char::is_lowercase);
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if result.is_empty() {
            result.extend(first.to_lowercase());
        } else {
            result.extend(first.to_uppercase());
        }
        if all_caps {
            result.extend(chars.flat_map(char::to_lowercase));
        } else {
            result.extend(chars);
        }
    }

    if result.is_empty() {
        return "_empty".to_string();
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

/// Stable partition: required entries first, optional after, each group
/// keeping its relative order.
pub fn required_first(props: &[PropertyDef]) -> Vec<&PropertyDef> {
    let (required, optional): (Vec<_>, Vec<_>) = props.iter().partition(|p| !p.optional);
    required.into_iter().chain(optional).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::super::api::TypeDef;
    use super::*;

    #[test]
    fn test_needs_quoting() {
        assert!(!needs_quoting("foo"));
        assert!(!needs_quoting("_foo"));
        assert!(!needs_quoting("$foo"));
        assert!(!needs_quoting("foo123"));
        assert!(!needs_quoting("OPEN"));

        assert!(needs_quoting(""));
        assert!(needs_quoting("123foo"));
        assert!(needs_quoting("foo-bar"));
        assert!(needs_quoting("foo.bar"));
        assert!(needs_quoting("foo bar"));
    }

    #[test]
    fn test_escape_ts_string() {
        assert_eq!(escape_ts_string("hello"), "hello");
        assert_eq!(escape_ts_string("hel\"lo"), "hel\\\"lo");
        assert_eq!(escape_ts_string("hel\\lo"), "hel\\\\lo");
    }

    #[test]
    fn test_escape_ts_string_line_terminators_and_controls() {
        assert_eq!(escape_ts_string("a\nb"), "a\\nb");
        assert_eq!(escape_ts_string("a\r\tb"), "a\\r\\tb");
        assert_eq!(escape_ts_string("a\u{2028}b\u{2029}"), "a\\u2028b\\u2029");
        assert_eq!(escape_ts_string("bell\u{7}"), "bell\\u0007");
        assert_eq!(escape_ts_string("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn test_enum_member_name() {
        assert_eq!(enum_member_name("OPEN"), "OPEN");
        assert_eq!(enum_member_name("in-progress"), "in-progress");
        assert_eq!(enum_member_name("1"), "_1");
        assert_eq!(enum_member_name("-2"), "_-2");
        assert_eq!(enum_member_name("1.5"), "_1.5");
    }

    #[test]
    fn test_to_type_identifier() {
        assert_eq!(to_type_identifier("TicketDTO"), "TicketDTO");
        assert_eq!(to_type_identifier("pet_dto"), "pet_dto");
        assert_eq!(to_type_identifier("io.k8s.Pod"), "IoK8sPod");
        assert_eq!(to_type_identifier("v1.Pod-Spec"), "V1PodSpec");
        assert_eq!(to_type_identifier("Page[User]"), "PageUser");
        assert_eq!(to_type_identifier("2fa.Token"), "_2faToken");
        assert_eq!(to_type_identifier("..."), "_Empty");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
        assert_eq!(quote_if_needed("2xx"), "\"2xx\"");
    }

    #[test]
    fn test_to_lower_camel() {
        assert_eq!(to_lower_camel("id"), "id");
        assert_eq!(to_lower_camel("page size"), "pageSize");
        assert_eq!(to_lower_camel("page   size"), "pageSize");
        assert_eq!(to_lower_camel("page_size"), "pageSize");
        assert_eq!(to_lower_camel("X-Request-Id"), "xRequestId");
        assert_eq!(to_lower_camel("PAGE_SIZE"), "pageSize");
        assert_eq!(to_lower_camel("ID"), "id");
        assert_eq!(to_lower_camel("userID"), "userID");
        assert_eq!(to_lower_camel("sort.order"), "sortOrder");
        assert_eq!(to_lower_camel("itemId"), "itemId");
        assert_eq!(to_lower_camel("filter[name]"), "filterName");
        assert_eq!(to_lower_camel("2fa code"), "_2faCode");
        assert_eq!(to_lower_camel("  "), "_empty");
    }

    #[test]
    fn test_required_first_is_stable() {
        let prop = |name: &str, optional| PropertyDef {
            name: name.into(),
            type_def: TypeDef::Str,
            optional,
        };
        let props = vec![
            prop("a", true),
            prop("b", false),
            prop("c", true),
            prop("d", false),
            prop("e", false),
        ];
        let names: Vec<_> = required_first(&props).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "e", "a", "c"]);
    }
}
