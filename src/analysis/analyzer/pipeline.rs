//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The pipeline applies processing in this order:
//! 1. Char Filters: rewrite the raw text
//! 2. Tokenizer: splits text into tokens
//! 3. Token Filters: applied in the order they were added
//!
//! Token offsets are mapped back through the char filters, so they always
//! point into the raw input.
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::analyzer::analyzer::Analyzer;
//! use derlem::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use derlem::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//! use derlem::analysis::token_filter::lowercase::LowercaseFilter;
//! use derlem::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(UnicodeWordTokenizer::new());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["ve"])))
//!     .with_name("faiz_kur");
//!
//! let tokens: Vec<_> = analyzer.analyze("Faiz VE kur").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "faiz");
//! assert_eq!(tokens[1].text, "kur");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name, used in logs.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Maps an offset in the filtered text back to the text before the
    /// filter ran.
    fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
        let mut corrected = offset as isize;
        for t in transformations {
            if offset >= t.new_end {
                corrected += t.shrink();
            } else if offset >= t.new_start {
                // Inside a replacement: interpolate.
                let offset_in_new = offset - t.new_start;
                let new_len = t.new_end - t.new_start;
                let original_len = t.original_end - t.original_start;
                return t.original_start + offset_in_new * original_len / new_len;
            } else {
                break;
            }
        }
        corrected.max(0) as usize
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        if self.char_filters.is_empty() {
            return Ok(tokens);
        }

        // Map offsets from the last char filter back to the raw text.
        let collected: Vec<_> = tokens
            .map(|mut token| {
                for transformations in filter_transformations.iter().rev() {
                    token.start_offset = Self::correct_offset(token.start_offset, transformations);
                    token.end_offset = Self::correct_offset(token.end_offset, transformations);
                }
                token
            })
            .collect();
        Ok(Box::new(collected.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["ve", "ile"])));

        let tokens: Vec<Token> = analyzer
            .analyze("Maaş VE ücret ILE fiyat")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "maaş");
        assert_eq!(tokens[1].text, "ücret");
        assert_eq!(tokens[2].text, "fiyat");
    }

    #[test]
    fn test_offset_correction_after_removal() {
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"-", "").unwrap()));

        let tokens: Vec<Token> = analyzer.analyze("zam-lar geldi").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "zamlar");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 7);
        assert_eq!(tokens[1].start_offset, 8);
        assert_eq!(tokens[1].end_offset, 13);
    }

    #[test]
    fn test_offset_correction_inside_replacement() {
        let transformations = [Transformation::new(4, 8, 4, 6)];
        assert_eq!(PipelineAnalyzer::correct_offset(2, &transformations), 2);
        assert_eq!(PipelineAnalyzer::correct_offset(5, &transformations), 6);
        assert_eq!(PipelineAnalyzer::correct_offset(7, &transformations), 9);
    }

    #[test]
    fn test_debug_lists_components() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("deneme");
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("deneme"));
        assert!(debug.contains("unicode_word"));
        assert!(debug.contains("lowercase"));
        assert_eq!(analyzer.pipeline_name(), "deneme");
    }
}
