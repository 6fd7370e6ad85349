//! # derlem
//!
//! Normalization tools for Turkish news transcript corpora.
//!
//! ## Features
//!
//! - Token cleaning to the Turkish alphabet
//! - Detection of tokens a morphological analyzer rejects, with proper-noun
//!   and acronym excuses
//! - Apostrophe repair of root and suffix ("zamlandı" → "zam'landı")
//! - Verb-keyed sentence segmentation and part-of-speech parse selection
//! - Keyword filtering and word-frequency reports per channel

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod morphology;
pub mod report;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
