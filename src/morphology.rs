//! Morphological analysis for Turkish tokens.
//!
//! The heuristics in this crate never look inside a morphological analyzer.
//! They only ask it for the ordered list of candidate analyses of a token and
//! inspect the part of speech and serialized form of each candidate. Anything
//! that can answer that question implements [`MorphologicalAnalyzer`].
//!
//! # Available Analyzers
//!
//! - [`lexicon::LexiconAnalyzer`] - Exact lookup in a tab-separated lexicon
//!
//! # Examples
//!
//! ```
//! use derlem::morphology::MorphologicalAnalyzer;
//! use derlem::morphology::lexicon::LexiconAnalyzer;
//!
//! let lexicon: LexiconAnalyzer = "zam\tzam+NOUN+A3SG+PNON+NOM".parse().unwrap();
//! assert!(lexicon.accepts("zam"));
//! assert!(!lexicon.accepts("zamlandı"));
//! ```

use crate::morphology::parse::Analysis;

/// Trait for morphological analyzers.
///
/// Implementations must be deterministic and free of visible side effects for
/// the duration of a run. The trait requires `Send + Sync` so that documents
/// can be scanned concurrently against one shared analyzer.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Return every candidate analysis of `token` in analyzer order.
    ///
    /// An empty vector means the token is not recognized.
    fn analyze(&self, token: &str) -> Vec<Analysis>;

    /// Get the name of this analyzer (for logging).
    fn name(&self) -> &'static str;

    /// Check whether the analyzer recognizes `token` at all.
    fn accepts(&self, token: &str) -> bool {
        !self.analyze(token).is_empty()
    }
}

impl<T: MorphologicalAnalyzer + ?Sized> MorphologicalAnalyzer for &T {
    fn analyze(&self, token: &str) -> Vec<Analysis> {
        (**self).analyze(token)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn accepts(&self, token: &str) -> bool {
        (**self).accepts(token)
    }
}

impl<T: MorphologicalAnalyzer + ?Sized> MorphologicalAnalyzer for std::sync::Arc<T> {
    fn analyze(&self, token: &str) -> Vec<Analysis> {
        (**self).analyze(token)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn accepts(&self, token: &str) -> bool {
        (**self).accepts(token)
    }
}

pub mod lexicon;
pub mod parse;
pub mod pos;
pub mod segmenter;
pub mod selector;
