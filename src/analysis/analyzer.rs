//! Analyzers combine a tokenizer with char filters and token filters.

pub mod analyzer;
pub mod pipeline;
pub mod turkish;
