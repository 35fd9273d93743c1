/// Returns a greeting message for the given name.
///
/// Falls back to the generic `"Hello, World!"` when the name is absent or
/// empty. Anything else is interpolated verbatim, whitespace included.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => {
            tracing::trace!(name, "formatting greeting");
            format!("Hello, {}!", name)
        }
        _ => {
            tracing::trace!("no name provided, using default greeting");
            "Hello, World!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_with_name() {
        assert_eq!(greet(Some("Alice")), "Hello, Alice!");
    }

    #[test]
    fn test_greet_with_empty_string() {
        assert_eq!(greet(Some("")), "Hello, World!");
    }

    #[test]
    fn test_greet_with_none() {
        assert_eq!(greet(None), "Hello, World!");
    }

    #[test]
    fn test_greet_keeps_whitespace_names() {
        // Only the empty/absent case falls back to the default.
        assert_eq!(greet(Some(" ")), "Hello,  !");
    }
}
