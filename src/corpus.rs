//! Transcript corpora on disk.
//!
//! Discovery, decoding, keyword filtering and word frequencies.

pub mod document;
pub mod filter;
pub mod frequency;
pub mod reader;
