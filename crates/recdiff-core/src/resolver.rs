//! Accessor core-name resolution.
//!
//! Converts a declared field name into the core of its accessor method
//! name according to bean-style naming conventions. The `get`/`is` prefix
//! is added by the binder, not here.

/// Compute the accessor core name for a field name.
///
/// Rules, evaluated in order, first match wins:
/// 1. an empty name is returned unchanged (no accessor will match it);
/// 2. a name whose first character is lowercase and whose second character
///    is uppercase is returned unchanged - the capitalize transform would
///    produce a name no accessor carries (e.g. `pStrVal`, whose accessor
///    is spelled `getpStrVal`);
/// 3. a name longer than two characters starting with `is` followed by an
///    uppercase character has the `is` prefix stripped (`isBool` -> `Bool`);
/// 4. otherwise the first character is upper-cased and the remainder kept
///    (`intVal` -> `IntVal`).
pub fn accessor_core_name(field_name: &str) -> String {
    let mut chars = field_name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if let Some(second) = chars.next() {
        if first.is_lowercase() && second.is_uppercase() {
            return field_name.to_string();
        }
    }
    if field_name.len() > 2 && field_name.starts_with("is") {
        let after_prefix = &field_name[2..];
        if after_prefix.chars().next().is_some_and(char::is_uppercase) {
            return after_prefix.to_string();
        }
    }
    let mut core = String::with_capacity(field_name.len());
    core.extend(first.to_uppercase());
    core.push_str(&field_name[first.len_utf8()..]);
    core
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_unchanged() {
        assert_eq!(accessor_core_name(""), "");
    }

    #[test]
    fn test_plain_names_capitalized() {
        assert_eq!(accessor_core_name("intVal"), "IntVal");
        assert_eq!(accessor_core_name("strVal"), "StrVal");
        assert_eq!(accessor_core_name("exist"), "Exist");
        assert_eq!(accessor_core_name("x"), "X");
    }

    #[test]
    fn test_is_prefix_stripped() {
        assert_eq!(accessor_core_name("isBool"), "Bool");
        assert_eq!(accessor_core_name("isExist"), "Exist");
    }

    #[test]
    fn test_short_is_not_stripped() {
        // `is` alone falls through to the capitalize rule
        assert_eq!(accessor_core_name("is"), "Is");
        // `is` followed by lowercase is an ordinary name
        assert_eq!(accessor_core_name("island"), "Island");
    }

    #[test]
    fn test_irregular_prefix_name_unchanged() {
        assert_eq!(accessor_core_name("pStrVal"), "pStrVal");
        assert_eq!(accessor_core_name("iStuff"), "iStuff");
    }

    #[test]
    fn test_already_capitalized_unchanged() {
        assert_eq!(accessor_core_name("IntVal"), "IntVal");
    }
}
