//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`TurkishNewsAnalyzer`](super::turkish::TurkishNewsAnalyzer) - Word counting for Turkish transcripts
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::analyzer::analyzer::Analyzer;
//! use derlem::analysis::analyzer::turkish::TurkishNewsAnalyzer;
//!
//! let analyzer = TurkishNewsAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Peki, Enflasyon %64!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "enflasyon");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve a parallel
/// corpus scan.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze and keep only the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
