//! Token filter implementations for token transformation.
//!
//! # Available Filters
//!
//! - [`clean::CleanFilter`] - Strips characters outside the Turkish alphabet
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`min_length::MinLengthFilter`] - Stops tokens that are too short
//! - [`stop::StopFilter`] - Removes stop words
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty and stopped tokens
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::token_filter::Filter;
//! use derlem::analysis::token_filter::lowercase::LowercaseFilter;
//! use derlem::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Enflasyon", 0), Token::new("ZAM", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "enflasyon");
//! assert_eq!(filtered[1].text, "zam");
//! ```
//!
//! The frequency reports chain them as:
//!
//! ```text
//! Tokenizer → Lowercase → Clean → RemoveEmpty → MinLength → Stop
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. The trait
/// requires `Send + Sync` so a pipeline can be shared between threads.
///
/// # Examples
///
/// ```
/// use derlem::analysis::token::{Token, TokenStream};
/// use derlem::analysis::token_filter::Filter;
/// use derlem::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|t| {
///                 let text: String = t.text.chars().rev().collect();
///                 t.with_text(text)
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod clean;
pub mod lowercase;
pub mod min_length;
pub mod remove_empty;
pub mod stop;
