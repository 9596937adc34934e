//! Text field validators

/// Whitespace as browsers see it: Unicode `White_Space` plus the BOM,
/// minus NEL (U+0085), which `trim()` and `\s` leave alone
#[inline]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Trims leading and trailing whitespace
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

/// Removes every whitespace character, including interior ones
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|&c| !is_form_whitespace(c)).collect()
}

/// Returns `message` when `value` is empty after trimming, `""` otherwise
pub fn validate_required_field(value: &str, message: &str) -> String {
    if trim_whitespace(value).is_empty() {
        message.to_string()
    } else {
        String::new()
    }
}

/// Returns `message` when `value` has fewer than `min_chars` non-whitespace
/// characters, `""` otherwise
///
/// Whitespace anywhere in the value is ignored, so `"a b"` counts as two
/// characters. Characters are Unicode scalar values, not bytes.
pub fn validate_length(value: &str, min_chars: usize, message: &str) -> String {
    let count = value.chars().filter(|&c| !is_form_whitespace(c)).count();

    if count < min_chars {
        message.to_string()
    } else {
        String::new()
    }
}
