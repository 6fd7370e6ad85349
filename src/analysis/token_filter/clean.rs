//! Alphabet cleaning as a token filter.
//!
//! Wraps [`TokenCleaner`] so the same alphabet rules apply inside an analysis
//! pipeline. Tokens that clean to nothing are marked stopped.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::spelling::cleaner::TokenCleaner;

/// A filter that strips characters outside the Turkish alphabet.
///
/// ```
/// use derlem::analysis::token_filter::Filter;
/// use derlem::analysis::token_filter::clean::CleanFilter;
/// use derlem::analysis::token::Token;
///
/// let filter = CleanFilter::new();
/// let tokens = vec![Token::new("zam,", 0), Token::new("%64", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(result[0].text, "zam");
/// assert!(result[1].is_stopped());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CleanFilter {
    cleaner: TokenCleaner,
    keep_apostrophe: bool,
}

impl CleanFilter {
    pub fn new() -> Self {
        Self::with_cleaner(TokenCleaner::new())
    }

    pub fn with_cleaner(cleaner: TokenCleaner) -> Self {
        CleanFilter {
            cleaner,
            keep_apostrophe: false,
        }
    }

    pub fn keep_apostrophe(mut self, keep: bool) -> Self {
        self.keep_apostrophe = keep;
        self
    }
}

impl Filter for CleanFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let cleaned = self.cleaner.clean_with(&token.text, self.keep_apostrophe);
                if cleaned.is_empty() {
                    token.with_text(cleaned).stop()
                } else {
                    token.with_text(cleaned)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "clean"
    }
}
