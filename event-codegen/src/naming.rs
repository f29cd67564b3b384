//! Identifier case conversion
//!
//! Derived names are computed with a single rule: every uppercase letter
//! starts a new word, words are joined with `_` and lowercased. This covers
//! both PascalCase variant names (`ShareImage` → `share_image`) and camelCase
//! field names (`imageName` → `image_name`). Identifiers that are already
//! snake case come out unchanged. Acronyms are not grouped: `HTTPError`
//! becomes `h_t_t_p_error`.

/// Strip the raw identifier prefix (`r#type` → `type`)
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Convert a PascalCase or camelCase identifier to lower_snake_case
pub fn to_snake_case(ident: &str) -> String {
    let ident = unraw(ident);
    let mut out = String::with_capacity(ident.len() + 4);

    for (index, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Derived event name for a variant
pub fn event_name(variant: &str) -> String {
    to_snake_case(variant)
}

/// Derived parameter key for a field
pub fn param_key(field: &str) -> String {
    to_snake_case(field)
}

/// Whether an identifier is already in snake case (no uppercase letters)
pub fn is_snake_case(ident: &str) -> bool {
    !unraw(ident).chars().any(char::is_uppercase)
}

/// Artifact file stem for a qualified path (`crate::event::MyEvent` → `event__my_event`)
pub fn qualified_file_stem(path: &str) -> String {
    path.split("::")
        .filter(|segment| !segment.is_empty() && *segment != "crate" && *segment != "self")
        .map(to_snake_case)
        .collect::<Vec<_>>()
        .join("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(event_name("ShareImage"), "share_image");
        assert_eq!(event_name("ButtonTapped"), "button_tapped");
        assert_eq!(event_name("Login"), "login");
        assert_eq!(event_name("Level2Reached"), "level2_reached");
    }

    #[test]
    fn test_event_name_is_deterministic() {
        assert_eq!(event_name("ShareImage"), event_name("ShareImage"));
    }

    #[test]
    fn test_param_keys() {
        assert_eq!(param_key("imageName"), "image_name");
        assert_eq!(param_key("fullString"), "full_string");
        assert_eq!(param_key("id"), "id");
    }

    #[test]
    fn test_snake_case_is_unchanged() {
        assert_eq!(param_key("image_name"), "image_name");
        assert!(is_snake_case("image_name"));
        assert!(!is_snake_case("imageName"));
    }

    #[test]
    fn test_acronyms_split_per_letter() {
        assert_eq!(event_name("HTTPError"), "h_t_t_p_error");
    }

    #[test]
    fn test_raw_identifiers() {
        assert_eq!(unraw("r#type"), "type");
        assert_eq!(param_key("r#type"), "type");
        assert_eq!(unraw("kind"), "kind");
    }

    #[test]
    fn test_qualified_file_stem() {
        assert_eq!(qualified_file_stem("crate::event::MyEvent"), "event__my_event");
        assert_eq!(qualified_file_stem("MyEvent"), "my_event");
    }
}
