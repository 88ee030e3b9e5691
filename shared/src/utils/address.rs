//! Contact address normalization utilities
//!
//! Canonicalizes user-supplied contact addresses into the form used as the
//! verification store key: lowercase for email addresses, dialable
//! `+<countrycode><subscriber>` form for phone numbers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered prefix rules mapping a leading national-trunk pattern or country
/// calling code to its dialable replacement.
///
/// First match wins. Longer codes must precede shorter codes that share a
/// leading digit, so the three-digit Latin American codes sit above the
/// two-digit ones.
const PREFIX_RULES: &[(&str, &str)] = &[
    // Korean mobile trunk codes (trunk zero dropped)
    ("010", "+8210"),
    ("011", "+8211"),
    ("016", "+8216"),
    ("017", "+8217"),
    ("018", "+8218"),
    ("019", "+8219"),
    // Three-digit Latin American calling codes
    ("593", "+593"), // Ecuador
    ("502", "+502"), // Guatemala
    ("504", "+504"), // Honduras
    ("505", "+505"), // Nicaragua
    ("507", "+507"), // Panama
    ("595", "+595"), // Paraguay
    ("598", "+598"), // Uruguay
    ("591", "+591"), // Bolivia
    ("506", "+506"), // Costa Rica
    // Two-digit Latin American calling codes
    ("52", "+52"), // Mexico
    ("54", "+54"), // Argentina
    ("55", "+55"), // Brazil
    ("57", "+57"), // Colombia
    ("51", "+51"), // Peru
    ("56", "+56"), // Chile
    ("58", "+58"), // Venezuela
    // North America
    ("1", "+1"),
];

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Check whether an address is an email address rather than a phone number
pub fn is_email(address: &str) -> bool {
    address.contains('@')
}

/// Canonicalize a contact address
///
/// Email addresses are trimmed and lowercased. Phone numbers are stripped
/// of whitespace, parentheses, and hyphens, then run through the prefix
/// table to infer the country when no explicit `+` prefix is present.
/// Idempotent: canonical input passes through unchanged.
pub fn normalize_address(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_email(trimmed) {
        return trimmed.to_lowercase();
    }
    normalize_phone(trimmed)
}

/// Canonicalize a phone number into dialable international form
pub fn normalize_phone(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect();

    if cleaned.starts_with('+') {
        return cleaned;
    }

    for (prefix, replacement) in PREFIX_RULES {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            return format!("{}{}", replacement, rest);
        }
    }

    // Unknown country: pass through unchanged rather than reject
    cleaned
}

/// Check if a phone number is valid international E.164 form
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Mask an address for log output
///
/// Phone numbers keep the first three and last two characters; email
/// addresses keep the first character of the local part and the domain.
pub fn mask_address(address: &str) -> String {
    if is_email(address) {
        return match address.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{}***@{}", first, domain),
                None => format!("***@{}", domain),
            },
            None => String::from("***"),
        };
    }

    let chars: Vec<char> = address.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        String::from("****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_trunk_codes() {
        assert_eq!(normalize_address("01012345678"), "+821012345678");
        assert_eq!(normalize_address("01112345678"), "+821112345678");
        assert_eq!(normalize_address("01612345678"), "+821612345678");
        assert_eq!(normalize_address("01712345678"), "+821712345678");
        assert_eq!(normalize_address("01812345678"), "+821812345678");
        assert_eq!(normalize_address("01912345678"), "+821912345678");
    }

    #[test]
    fn test_mexico() {
        assert_eq!(normalize_address("5212345678901"), "+5212345678901");
    }

    #[test]
    fn test_argentina() {
        assert_eq!(normalize_address("541112345678"), "+541112345678");
    }

    #[test]
    fn test_brazil() {
        assert_eq!(normalize_address("5511912345678"), "+5511912345678");
    }

    #[test]
    fn test_colombia() {
        assert_eq!(normalize_address("573001234567"), "+573001234567");
    }

    #[test]
    fn test_peru() {
        assert_eq!(normalize_address("51912345678"), "+51912345678");
    }

    #[test]
    fn test_chile() {
        assert_eq!(normalize_address("56912345678"), "+56912345678");
    }

    #[test]
    fn test_venezuela() {
        assert_eq!(normalize_address("584121234567"), "+584121234567");
    }

    #[test]
    fn test_ecuador() {
        assert_eq!(normalize_address("593991234567"), "+593991234567");
    }

    #[test]
    fn test_guatemala() {
        assert_eq!(normalize_address("50212345678"), "+50212345678");
    }

    #[test]
    fn test_honduras() {
        assert_eq!(normalize_address("50412345678"), "+50412345678");
    }

    #[test]
    fn test_nicaragua() {
        assert_eq!(normalize_address("50512345678"), "+50512345678");
    }

    #[test]
    fn test_panama() {
        assert_eq!(normalize_address("50712345678"), "+50712345678");
    }

    #[test]
    fn test_paraguay() {
        assert_eq!(normalize_address("595981234567"), "+595981234567");
    }

    #[test]
    fn test_uruguay() {
        assert_eq!(normalize_address("59891234567"), "+59891234567");
    }

    #[test]
    fn test_bolivia() {
        assert_eq!(normalize_address("59171234567"), "+59171234567");
    }

    #[test]
    fn test_costa_rica() {
        assert_eq!(normalize_address("50612345678"), "+50612345678");
    }

    #[test]
    fn test_north_america() {
        assert_eq!(normalize_address("14155552671"), "+14155552671");
    }

    #[test]
    fn test_unknown_country_passes_through() {
        assert_eq!(normalize_address("9991234567"), "9991234567");
    }

    #[test]
    fn test_three_digit_codes_win_over_shorter_prefixes() {
        // 59x numbers must not be captured by the two-digit rules
        assert_eq!(normalize_address("59891234567"), "+59891234567");
        assert_eq!(normalize_address("59171234567"), "+59171234567");
    }

    #[test]
    fn test_explicit_plus_passes_through() {
        assert_eq!(normalize_address("+821012345678"), "+821012345678");
        assert_eq!(normalize_address("+14155552671"), "+14155552671");
    }

    #[test]
    fn test_formatting_characters_stripped() {
        assert_eq!(normalize_address("010-1234-5678"), "+821012345678");
        assert_eq!(normalize_address("(52) 1234 5678 901"), "+5212345678901");
        assert_eq!(normalize_address("+52 (123) 456-78901"), "+5212345678901");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "01012345678",
            "5212345678901",
            "14155552671",
            "9991234567",
            "User@Example.COM",
        ];
        for input in inputs {
            let once = normalize_address(input);
            assert_eq!(normalize_address(&once), once);
        }
    }

    #[test]
    fn test_email_lowercased() {
        assert_eq!(normalize_address("  User@Example.COM "), "user@example.com");
    }

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+821012345678"));
        assert!(is_valid_e164("+5212345678901"));
        assert!(!is_valid_e164("01012345678"));
        assert!(!is_valid_e164("+0123456789"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_address("+821012345678"), "+82****78");
        assert_eq!(mask_address("12345"), "****");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_address("user@example.com"), "u***@example.com");
    }
}
