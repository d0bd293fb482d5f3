//! Codes of some common languages. Any code is accepted where a language is expected,
//! these are only for readability.

pub const ARABIC: &str = "ar";
pub const BRAZILIAN_PORTUGUESE: &str = "pt-br";
pub const CHINESE: &str = "zh";
pub const DUTCH: &str = "nl";
pub const ENGLISH: &str = "en";
pub const ENGLISH_UK: &str = "en-gb";
pub const FRENCH: &str = "fr";
pub const GERMAN: &str = "de";
pub const HEBREW: &str = "he";
pub const HINDI: &str = "hi";
pub const ITALIAN: &str = "it";
pub const POLISH: &str = "pl";
pub const PORTUGUESE: &str = "pt";
pub const RUSSIAN: &str = "ru";
pub const SIMPLIFIED_CHINESE: &str = "zh-hans";
pub const SPANISH: &str = "es";
pub const TRADITIONAL_CHINESE: &str = "zh-hant";
pub const TURKISH: &str = "tr";
pub const UKRAINIAN: &str = "uk";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, Term};

    #[test]
    fn test_codes_are_normalized() {
        for code in [ENGLISH_UK, BRAZILIAN_PORTUGUESE, SIMPLIFIED_CHINESE, GERMAN] {
            assert_eq!(Language::from_code(code).as_str(), code);
        }
    }

    #[test]
    fn test_term_in_language() {
        let term = Term::new("EN-GB", "colour");
        assert!(term.is_in(ENGLISH_UK));
        assert!(!term.is_in(ENGLISH));
    }
}
