//! Finding and repairing misspelled tokens in transcripts.
//!
//! Tokens are cleaned, looked up with a [`MorphologicalAnalyzer`], excused
//! when they are suffixed proper nouns or acronyms, and repaired when a
//! missing apostrophe is all that keeps them from parsing.
//!
//! [`MorphologicalAnalyzer`]: crate::morphology::MorphologicalAnalyzer

pub mod cleaner;
pub mod detector;
pub mod proper_noun;
pub mod record;
pub mod repair;
