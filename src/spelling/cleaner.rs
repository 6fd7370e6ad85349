//! Token cleaning for Turkish transcript text.
//!
//! Transcripts carry punctuation, digits and stray symbols glued to words
//! ("enflasyon,", "%20'lik", "(TÜİK)"). The cleaner keeps only the letters of
//! the Turkish alphabet and, when asked, the apostrophe that separates a proper
//! noun from its suffix.

use serde::{Deserialize, Serialize};

/// Turkish letters outside the ASCII range, in both cases.
pub const TURKISH_LETTERS: &str = "çÇğĞıİöÖşŞüÜ";

/// Apostrophe that separates a root from its suffix ("Ankara'da").
pub const APOSTROPHE: char = '\'';

/// Configuration for the token cleaner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Additional characters treated as letters (e.g. "âîû" for older spellings).
    pub extra_letters: String,
}

/// Strips every character that is not a letter of the configured alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCleaner {
    extra_letters: Vec<char>,
}

impl TokenCleaner {
    /// Create a cleaner for the Turkish alphabet.
    pub fn new() -> Self {
        TokenCleaner::default()
    }

    /// Create a cleaner from configuration.
    pub fn with_config(config: &CleanerConfig) -> Self {
        TokenCleaner {
            extra_letters: config.extra_letters.chars().collect(),
        }
    }

    /// Check whether `c` belongs to the alphabet.
    pub fn is_letter(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || TURKISH_LETTERS.contains(c) || self.extra_letters.contains(&c)
    }

    /// Remove all non-letters, apostrophes included.
    ///
    /// ```
    /// use derlem::spelling::cleaner::TokenCleaner;
    ///
    /// let cleaner = TokenCleaner::new();
    /// assert_eq!(cleaner.clean("Mehmet'in,"), "Mehmetin");
    /// assert_eq!(cleaner.clean("%20"), "");
    /// ```
    pub fn clean(&self, raw: &str) -> String {
        self.clean_with(raw, false)
    }

    /// Remove all non-letters but keep apostrophes.
    pub fn clean_keep_apostrophe(&self, raw: &str) -> String {
        self.clean_with(raw, true)
    }

    /// Remove all non-letters, optionally keeping apostrophes.
    pub fn clean_with(&self, raw: &str, keep_apostrophe: bool) -> String {
        raw.chars()
            .filter(|&c| self.is_letter(c) || (keep_apostrophe && c == APOSTROPHE))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_punctuation_and_digits() {
        let cleaner = TokenCleaner::new();
        assert_eq!(cleaner.clean("enflasyon,"), "enflasyon");
        assert_eq!(cleaner.clean("(TÜİK)"), "TÜİK");
        assert_eq!(cleaner.clean("%20'lik"), "lik");
        assert_eq!(cleaner.clean("..."), "");
    }

    #[test]
    fn test_clean_keep_apostrophe() {
        let cleaner = TokenCleaner::new();
        assert_eq!(cleaner.clean_keep_apostrophe("Ankara'da."), "Ankara'da");
        assert_eq!(cleaner.clean("Ankara'da."), "Ankarada");
    }

    #[test]
    fn test_turkish_letters_are_kept() {
        let cleaner = TokenCleaner::new();
        assert_eq!(cleaner.clean("çığır-öğüş"), "çığıröğüş");
        assert_eq!(cleaner.clean("İSTANBUL"), "İSTANBUL");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let cleaner = TokenCleaner::new();
        for raw in ["Mehmet'in", "%20'lik", "zam!!", "", "çağ-daş", "1.5"] {
            let once = cleaner.clean(raw);
            assert_eq!(cleaner.clean(&once), once);

            let once = cleaner.clean_keep_apostrophe(raw);
            assert_eq!(cleaner.clean_keep_apostrophe(&once), once);
        }
    }

    #[test]
    fn test_extra_letters() {
        let cleaner = TokenCleaner::with_config(&CleanerConfig {
            extra_letters: "âî".to_string(),
        });
        assert_eq!(cleaner.clean("kâr"), "kâr");
        assert_eq!(TokenCleaner::new().clean("kâr"), "kr");
    }
}
