use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::clean::CleanFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::min_length::{DEFAULT_MIN_LENGTH, MinLengthFilter};
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Word-counting analyzer for Turkish news transcripts.
///
/// Drops everything outside the Turkish alphabet, lowercases, removes words
/// shorter than the minimum length and removes news stop words.
pub struct TurkishNewsAnalyzer {
    inner: PipelineAnalyzer,
}

impl TurkishNewsAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_MIN_LENGTH, StopFilter::new())
    }

    pub fn with_options(min_length: usize, stop_filter: StopFilter) -> Result<Self> {
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(PatternReplaceCharFilter::non_turkish_letters()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(CleanFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::new(min_length)))
            .add_filter(Arc::new(stop_filter))
            .with_name("turkish_news");

        Ok(Self { inner: analyzer })
    }
}

impl Analyzer for TurkishNewsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "turkish_news"
    }
}

impl Debug for TurkishNewsAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurkishNewsAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_turkish_news_analyzer() {
        let analyzer = TurkishNewsAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("Merkez Bankası faizi %45'e yükseltti, dedi.")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["merkez", "bankası", "faizi", "yükseltti"]);
    }

    #[test]
    fn test_dotted_capital_is_folded() {
        let analyzer = TurkishNewsAnalyzer::new().unwrap();
        let terms = analyzer.terms("İSTANBUL İzmir").unwrap();
        assert_eq!(terms, vec!["istanbul", "izmir"]);
    }

    #[test]
    fn test_apostrophe_joins_suffix() {
        let analyzer = TurkishNewsAnalyzer::new().unwrap();
        let terms = analyzer.terms("TÜİK'in verisi").unwrap();
        assert_eq!(terms, vec!["tüikin", "verisi"]);
    }

    #[test]
    fn test_min_length_and_custom_stop_words() {
        let analyzer =
            TurkishNewsAnalyzer::with_options(4, StopFilter::with_extra_words(["haber"])).unwrap();
        let terms = analyzer.terms("kur faiz haber bülteni").unwrap();
        assert_eq!(terms, vec!["faiz", "bülteni"]);
    }

    #[test]
    fn test_offsets_point_into_raw_text() {
        let analyzer = TurkishNewsAnalyzer::new().unwrap();
        let text = "%64 enflasyon";
        let tokens: Vec<Token> = analyzer.analyze(text).unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(&text[tokens[0].start_offset..tokens[0].end_offset], "enflasyon");
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(TurkishNewsAnalyzer::new().unwrap().name(), "turkish_news");
    }
}
