//! Text analysis pipeline.
//!
//! A pipeline runs char filters over the raw text, splits it with a tokenizer
//! and passes the tokens through a chain of token filters. The word-frequency
//! reports are built on it, and the token cleaner is available as a filter.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
