//! Digit extraction and character screening.

use regex::Regex;
use std::sync::OnceLock;

/// Strip every character that is not an ASCII digit.
///
/// Idempotent: `extract_digits(&extract_digits(x)) == extract_digits(x)`.
#[must_use]
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Whether `input` uses only digits, whitespace, parentheses, hyphens, plus signs, and dots.
#[must_use]
pub fn has_only_phone_characters(input: &str) -> bool {
    static PHONE_CHARS: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_CHARS.get_or_init(|| Regex::new(r"^[0-9\s()+.\-]*$").expect("valid regex"));
    regex.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("+1 (212) 869-1246"), "12128691246");
        assert_eq!(extract_digits("212.869.1246"), "2128691246");
        assert_eq!(extract_digits("call me"), "");
        assert_eq!(extract_digits(""), "");
        // Non-ASCII digits are not phone digits
        assert_eq!(extract_digits("١٢٣4"), "4");
    }

    #[test]
    fn test_extract_digits_idempotent() {
        for input in ["+44 7700 900123", "abc", "", "(555) 010-0000 ext. 12"] {
            let once = extract_digits(input);
            assert_eq!(extract_digits(&once), once);
        }
    }

    #[test]
    fn test_has_only_phone_characters() {
        assert!(has_only_phone_characters("+1 (212) 869-1246"));
        assert!(has_only_phone_characters("212.869.1246"));
        assert!(has_only_phone_characters(""));
        assert!(!has_only_phone_characters("212-869-1246 ext 5"));
        assert!(!has_only_phone_characters("+44#7700"));
        assert!(!has_only_phone_characters("١٢٣"));
    }
}
