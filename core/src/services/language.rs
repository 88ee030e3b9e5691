//! Message-language resolution for outbound verification messages.

use cl_shared::types::language::Language;
use cl_shared::utils::address::is_email;

/// Nationality codes treated as the primary (Korean) market
const PRIMARY_NATIONALITIES: &[&str] = &["kr", "kor", "82"];

/// Email domain suffixes associated with the Spanish-speaking market
const SPANISH_DOMAIN_SUFFIXES: &[&str] = &[
    ".mx", ".ar", ".cl", ".co", ".pe", ".ec", ".ve", ".bo", ".py", ".uy", ".gt", ".cr", ".hn",
    ".ni", ".sv", ".pa", ".do", ".es",
];

/// Infer the outbound message language
///
/// A supplied nationality hint decides directly: the primary-market code
/// selects Korean, anything else selects Spanish. Without a hint, email
/// addresses are checked against the Spanish-market domain suffixes;
/// everything else defaults to Korean.
pub fn resolve_language(nationality: Option<&str>, address: &str) -> Language {
    if let Some(nationality) = nationality.map(str::trim).filter(|n| !n.is_empty()) {
        let lowered = nationality.trim_start_matches('+').to_lowercase();
        if PRIMARY_NATIONALITIES.contains(&lowered.as_str()) {
            return Language::Korean;
        }
        return Language::Spanish;
    }

    if is_email(address) {
        let lowered = address.to_lowercase();
        if let Some((_, domain)) = lowered.split_once('@') {
            if SPANISH_DOMAIN_SUFFIXES
                .iter()
                .any(|suffix| domain.ends_with(suffix))
            {
                return Language::Spanish;
            }
        }
    }

    Language::Korean
}
