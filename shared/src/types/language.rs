//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used for outbound messages
///
/// CitaLink serves two markets: Korea (primary) and Spanish-speaking
/// Latin America (secondary). Every outbound verification message is
/// rendered in one of these two languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "es")]
    Spanish,
}

impl Default for Language {
    fn default() -> Self {
        Language::Korean
    }
}

impl Language {
    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::Spanish => "es",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::Spanish => "Spanish",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::Spanish => "Español",
        }
    }

    /// Get locale code
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Korean => "ko-KR",
            Language::Spanish => "es-419",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "kor" | "korean" | "한국어" => Ok(Language::Korean),
            "es" | "spa" | "spanish" | "español" => Ok(Language::Spanish),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
