//! Input validation helpers
//!
//! Presence checks for request payloads. A text field counts as provided
//! only when it is non-empty after trimming.

/// Returns the trimmed value when the field carries text.
pub fn provided_text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Records `field` in `missing` unless the text field is provided.
pub fn require_text(value: &Option<String>, field: &'static str, missing: &mut Vec<&'static str>) {
    if provided_text(value).is_none() {
        missing.push(field);
    }
}

/// Records `field` in `missing` when the value is absent.
pub fn require_present<T>(value: &Option<T>, field: &'static str, missing: &mut Vec<&'static str>) {
    if value.is_none() {
        missing.push(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_text() {
        assert_eq!(provided_text(&Some("  IT ".to_string())), Some("IT"));
        assert_eq!(provided_text(&Some("   ".to_string())), None);
        assert_eq!(provided_text(&Some(String::new())), None);
        assert_eq!(provided_text(&None), None);
    }

    #[test]
    fn test_require_collects_missing_fields() {
        let mut missing = Vec::new();
        require_text(&Some("Ann".to_string()), "firstName", &mut missing);
        require_text(&Some(" ".to_string()), "lastName", &mut missing);
        require_present(&Some(0), "age", &mut missing);
        require_present::<i32>(&None, "dateOfJoining", &mut missing);
        assert_eq!(missing, vec!["lastName", "dateOfJoining"]);
    }
}
