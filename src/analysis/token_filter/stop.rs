//! Stop filter implementation.
//!
//! Removes words that carry no topic in Turkish news transcripts. The default
//! set is a base list of Turkish function words plus filler words common in
//! spoken news. Custom lists extend or replace it.
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::token_filter::Filter;
//! use derlem::analysis::token_filter::stop::StopFilter;
//! use derlem::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("peki", 0),
//!     Token::new("enflasyon", 1),
//!     Token::new("çünkü", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "enflasyon");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Turkish function words.
const DEFAULT_TURKISH_STOP_WORDS: &[&str] = &[
    "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birşey", "biz", "bu",
    "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en", "gibi", "hem", "hep",
    "hepsi", "her", "hiç", "için", "ile", "ise", "kez", "ki", "kim", "mı", "mu", "mü", "nasıl",
    "ne", "neden", "nerde", "nerede", "nereye", "niçin", "niye", "o", "sanki", "şey", "siz",
    "şu", "tüm", "ve", "veya", "ya", "yani",
];

/// Filler and framing words of spoken news.
const DEFAULT_NEWS_STOP_WORDS: &[&str] = &[
    // negation and existence
    "değil", "var", "vardı", "yok",
    // fillers
    "eee", "tabii", "peki", "evet", "zaten", "hatta", "artık", "efendim", "hani",
    // hedges and emphasis
    "belli", "işte", "sadece", "diğer", "yine", "böyle", "şöyle", "öyle", "özellikle",
    // pronouns
    "ben", "bana", "bizim", "bizlerle", "bize", "sen", "size", "onu", "onun", "onlar",
    "bunlar", "buna", "bunu", "bunun", "bundan", "kendi",
    // place and time
    "burada", "orada", "yer", "yıl", "gün", "bugün", "saat", "şimdi", "yarın", "hafta",
    "zaman", "son", "arasında", "sonra", "önce", "sırada",
    // quantity
    "biraz", "bir", "iki",
    // conjunctions and postpositions
    "dolayısıyla", "göre", "karşı", "şekilde", "kadar", "ancak",
    // auxiliaries
    "olan", "olarak", "oldu", "olacak", "olmuş", "oluyor", "etti", "eden", "edecek", "ediyor",
    "yapan", "yapılan", "yapıldı", "yaptığı", "geldi", "geliyor", "olsun",
    // reporting verbs
    "dedi", "diyor", "söyledi", "belirtti", "açıkladı", "ifade",
    "devam",
];

pub static DEFAULT_TURKISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_TURKISH_STOP_WORDS
        .iter()
        .chain(DEFAULT_NEWS_STOP_WORDS)
        .map(|s| s.to_string())
        .collect()
});

/// A filter that removes stop words.
///
/// Tokens already marked as stopped pass through. With `remove_stopped(false)`
/// matching tokens are marked instead of dropped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a stop filter with the default Turkish news stop words.
    ///
    /// ```
    /// use derlem::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("olarak"));
    /// assert!(!filter.is_stop_word("fiyat"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_TURKISH_STOP_WORDS_SET.clone())
    }

    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a stop filter from a list of words only.
    ///
    /// ```
    /// use derlem::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["haber", "kanal"]);
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// The default list extended with extra words.
    pub fn with_extra_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = DEFAULT_TURKISH_STOP_WORDS_SET.clone();
        stop_words.extend(words.into_iter().map(|s| s.as_ref().to_lowercase()));
        Self::with_stop_words(stop_words)
    }

    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
