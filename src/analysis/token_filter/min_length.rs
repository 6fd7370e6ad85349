//! Minimum length filter.
//!
//! Length is counted in characters, not bytes, so `çığ` has length 3.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default minimum token length for frequency counting.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// A filter that drops tokens shorter than a minimum length.
///
/// ```
/// use derlem::analysis::token_filter::Filter;
/// use derlem::analysis::token_filter::min_length::MinLengthFilter;
/// use derlem::analysis::token::Token;
///
/// let filter = MinLengthFilter::new(3);
/// let tokens = vec![Token::new("ab", 0), Token::new("çığ", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "çığ");
/// ```
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
    remove_stopped: bool,
}

impl MinLengthFilter {
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter {
            min_length,
            remove_stopped: true,
        }
    }

    /// Mark short tokens as stopped instead of removing them.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() || token.char_len() >= self.min_length {
                    Some(token)
                } else if self.remove_stopped {
                    None
                } else {
                    Some(token.stop())
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
