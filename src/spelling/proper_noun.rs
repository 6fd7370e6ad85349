//! Proper-noun and acronym recognition.
//!
//! Names such as "Ankara" or "Mehmet" usually reach the analyzer with a case
//! suffix attached and no apostrophe ("Ankarada", "Mehmetin"), so the
//! analyzer rejects them. The recognizer excuses such tokens when stripping one
//! known suffix leaves a form that was seen as a name somewhere in the corpus.
//!
//! Recognition runs in two phases. A [`ProperNounSetBuilder`] is fed every
//! token of the corpus, then [`ProperNounSetBuilder::freeze`] turns it into a
//! read-only [`ProperNounSet`] that answers queries. The builder is consumed,
//! so no query can observe a partially populated set.
//!
//! # Examples
//!
//! ```
//! use derlem::spelling::proper_noun::ProperNounSetBuilder;
//!
//! let mut builder = ProperNounSetBuilder::new();
//! builder.observe_text("Bugün Mehmet Bey açıklama yaptı");
//! let names = builder.freeze();
//!
//! assert!(names.is_suffixed_proper_noun("Mehmet'in"));
//! assert!(!names.is_suffixed_proper_noun("Ahmetin"));
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::spelling::cleaner::TokenCleaner;

/// Case and possessive suffixes that attach to proper nouns.
pub const DEFAULT_PROPER_SUFFIXES: &[&str] = &[
    "da", "de", "ta", "te", "daki", "deki", "dan", "den", "tan", "ten", "ndan", "nden", "nın",
    "nin", "nun", "nün", "ın", "in", "un", "ün", "a", "e", "ya", "ye", "ı", "i", "u", "ü",
];

/// Which corpus tokens are collected as proper-noun candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProperNounPolicy {
    /// Only tokens whose first letter is upper-case.
    #[default]
    Capitalized,
    /// Every token, regardless of case.
    AllTokens,
}

/// Configuration for proper-noun recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProperNounConfig {
    /// Collection policy for the corpus pre-scan.
    pub policy: ProperNounPolicy,
    /// Suffixes tried when checking a token against the set.
    pub suffixes: Vec<String>,
    /// Minimum cleaned length (in characters) of a collected form.
    pub min_length: usize,
}

impl Default for ProperNounConfig {
    fn default() -> Self {
        ProperNounConfig {
            policy: ProperNounPolicy::Capitalized,
            suffixes: DEFAULT_PROPER_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_length: 2,
        }
    }
}

/// Insert-only phase of the proper-noun set.
#[derive(Debug, Clone)]
pub struct ProperNounSetBuilder {
    names: AHashSet<String>,
    cleaner: TokenCleaner,
    config: ProperNounConfig,
}

impl ProperNounSetBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ProperNounConfig::default(), TokenCleaner::new())
    }

    pub fn with_config(config: ProperNounConfig, cleaner: TokenCleaner) -> Self {
        ProperNounSetBuilder {
            names: AHashSet::new(),
            cleaner,
            config,
        }
    }

    /// Consider one raw token. Returns true if a new form was added.
    pub fn observe(&mut self, raw: &str) -> bool {
        let cleaned = self.cleaner.clean(raw);
        if cleaned.chars().count() < self.config.min_length {
            return false;
        }

        let collect = match self.config.policy {
            ProperNounPolicy::Capitalized => cleaned.chars().next().is_some_and(char::is_uppercase),
            ProperNounPolicy::AllTokens => true,
        };

        collect && self.names.insert(cleaned.to_lowercase())
    }

    /// Consider every whitespace-separated token of `text`.
    pub fn observe_text(&mut self, text: &str) {
        for raw in text.split_whitespace() {
            self.observe(raw);
        }
    }

    /// Insert a known name directly, bypassing the policy.
    pub fn insert<S: AsRef<str>>(&mut self, name: S) {
        self.names.insert(name.as_ref().to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Finish the build phase.
    pub fn freeze(self) -> ProperNounSet {
        let mut suffixes: Vec<String> = self
            .config
            .suffixes
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect();
        // Stable, so equal-length suffixes keep their configured order.
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        ProperNounSet {
            names: self.names,
            suffixes,
            cleaner: self.cleaner,
        }
    }
}

impl Default for ProperNounSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only set of lowercase proper-noun forms.
#[derive(Debug, Clone)]
pub struct ProperNounSet {
    names: AHashSet<String>,
    suffixes: Vec<String>,
    cleaner: TokenCleaner,
}

impl ProperNounSet {
    pub fn contains(&self, form: &str) -> bool {
        self.names.contains(form)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Suffixes in the order they are tried, longest first.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether `token` is a known name followed by exactly one suffix.
    pub fn is_suffixed_proper_noun(&self, token: &str) -> bool {
        let lowered = self.cleaner.clean(token).to_lowercase();

        self.suffixes.iter().any(|suffix| {
            lowered
                .strip_suffix(suffix.as_str())
                .is_some_and(|root| self.names.contains(root))
        })
    }

    /// Return the suffix whose removal identified `token` as a name, if any.
    pub fn matching_suffix(&self, token: &str) -> Option<&str> {
        let lowered = self.cleaner.clean(token).to_lowercase();

        self.suffixes
            .iter()
            .find(|suffix| {
                lowered
                    .strip_suffix(suffix.as_str())
                    .is_some_and(|root| self.names.contains(root))
            })
            .map(String::as_str)
    }
}

/// Check whether the raw token is an acronym such as "TÜİK" or "TCMB'NİN".
///
/// A lower-case suffix disqualifies the token, so "TCMB'nin" is not one.
///
/// The token must contain at least one cased letter, no lower-case letter, and
/// more than one character. Digits and punctuation are ignored for the case
/// test but count toward the length.
pub fn is_acronym(raw: &str) -> bool {
    let mut has_cased = false;
    for c in raw.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased && raw.chars().count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(words: &[&str]) -> ProperNounSet {
        let mut builder = ProperNounSetBuilder::new();
        for word in words {
            builder.insert(word);
        }
        builder.freeze()
    }

    #[test]
    fn test_capitalized_policy_only_collects_capitalized() {
        let mut builder = ProperNounSetBuilder::new();
        assert!(builder.observe("Ankara,"));
        assert!(!builder.observe("ankara"));
        assert!(!builder.observe("enflasyon"));
        assert!(!builder.observe("A"));
        assert_eq!(builder.len(), 1);

        let set = builder.freeze();
        assert!(set.contains("ankara"));
        assert!(!set.contains("enflasyon"));
    }

    #[test]
    fn test_all_tokens_policy() {
        let config = ProperNounConfig {
            policy: ProperNounPolicy::AllTokens,
            ..Default::default()
        };
        let mut builder = ProperNounSetBuilder::with_config(config, TokenCleaner::new());
        builder.observe_text("enflasyon Ankara x 12");

        let set = builder.freeze();
        assert!(set.contains("enflasyon"));
        assert!(set.contains("ankara"));
        assert!(!set.contains("x"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_apostrophe_form_is_recognized() {
        let set = names(&["Mehmet"]);
        assert!(set.is_suffixed_proper_noun("Mehmet'in"));
        assert!(set.is_suffixed_proper_noun("Mehmetin"));
        assert_eq!(set.matching_suffix("Mehmet'in"), Some("in"));
    }

    #[test]
    fn test_longest_suffix_is_tried_first() {
        let config = ProperNounConfig {
            suffixes: vec!["da".into(), "ada".into()],
            ..Default::default()
        };
        let mut builder = ProperNounSetBuilder::with_config(config, TokenCleaner::new());
        builder.insert("ankara");
        builder.insert("ankar");
        let set = builder.freeze();

        assert_eq!(set.suffixes(), ["ada", "da"]);
        assert_eq!(set.matching_suffix("ankarada"), Some("ada"));
    }

    #[test]
    fn test_falls_back_to_shorter_suffix() {
        let set = names(&["ankara"]);
        assert!(set.is_suffixed_proper_noun("Ankarada"));
        assert!(set.is_suffixed_proper_noun("Ankaradan"));
    }

    #[test]
    fn test_only_one_suffix_is_stripped() {
        let set = names(&["ankara"]);
        assert!(!set.is_suffixed_proper_noun("Ankaradakide"));
        assert!(!set.is_suffixed_proper_noun("Ankara"));
    }

    #[test]
    fn test_equal_length_suffixes_keep_configured_order() {
        let set = ProperNounSetBuilder::new().freeze();
        let two: Vec<&str> = set
            .suffixes()
            .iter()
            .filter(|s| s.chars().count() == 2)
            .map(String::as_str)
            .collect();
        assert_eq!(&two[..4], ["da", "de", "ta", "te"]);
        assert_eq!(set.suffixes()[0], "daki");
    }

    #[test]
    fn test_is_acronym() {
        assert!(is_acronym("TÜİK"));
        assert!(is_acronym("TCMB'NİN"));
        assert!(is_acronym("AB,"));
        assert!(!is_acronym("TCMB'nin"));
        assert!(!is_acronym("TÜİK'ten"));
        assert!(!is_acronym("A"));
        assert!(!is_acronym("2024"));
        assert!(!is_acronym("Ankara"));
    }
}
