//! Lowercase filter implementation.
//!
//! Uses Unicode lowercasing, so `İ` becomes `i` followed by a combining dot
//! above. The [`CleanFilter`](super::clean::CleanFilter) later in the
//! frequency pipeline drops that mark.
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::token_filter::Filter;
//! use derlem::analysis::token_filter::lowercase::LowercaseFilter;
//! use derlem::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Şişli", 0), Token::new("ÜFE", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "şişli");
//! assert_eq!(filtered[1].text, "üfe");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Stopped tokens pass through untouched.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let lower = token.text.to_lowercase();
                    token.with_text(lower)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
