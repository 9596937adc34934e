//! Picking one message out of several validator results

/// Returns the first non-empty message, or `None` when every check passed
///
/// ```
/// use sabt_forms_validation::first_error;
///
/// assert_eq!(first_error(&["", "", "X", "Y"]), Some("X"));
/// assert_eq!(first_error(&["", ""]), None);
/// assert_eq!(first_error::<&str>(&[]), None);
/// ```
pub fn first_error<S: AsRef<str>>(errors: &[S]) -> Option<&str> {
    errors.iter().map(|e| e.as_ref()).find(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_owned_strings() {
        let errors = vec![String::new(), "a".to_string(), "b".to_string()];
        assert_eq!(first_error(&errors), Some("a"));
    }

    #[test]
    fn test_first_error_all_empty() {
        let errors: Vec<String> = vec![String::new(); 3];
        assert_eq!(first_error(&errors), None);
    }
}
