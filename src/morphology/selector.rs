//! Best-parse selection by part-of-speech priority.
//!
//! Given the candidates an analyzer returns for a token, the selector picks
//! the first verb reading, else the first noun, adjective or numeral reading in
//! that order, else whatever the analyzer listed first.

use crate::morphology::MorphologicalAnalyzer;
use crate::morphology::parse::Analysis;
use crate::morphology::pos::PartOfSpeech;

/// Placeholder emitted for tokens without any analysis.
pub const NO_PARSE: &str = "_";

/// Part-of-speech classes tried in order, one linear pass each.
pub const DEFAULT_PRIORITY: [fn(&PartOfSpeech) -> bool; 4] = [is_verb, is_noun, is_adj, is_num];

fn is_verb(pos: &PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Verb)
}

fn is_noun(pos: &PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Noun)
}

fn is_adj(pos: &PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Adj)
}

fn is_num(pos: &PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Num)
}

/// Picks one analysis per token.
pub struct ParseSelector<A: MorphologicalAnalyzer> {
    analyzer: A,
    priority: Vec<fn(&PartOfSpeech) -> bool>,
}

impl<A: MorphologicalAnalyzer> ParseSelector<A> {
    /// Create a selector with the VERB, NOUN, ADJ, NUM priority.
    pub fn new(analyzer: A) -> Self {
        ParseSelector {
            analyzer,
            priority: DEFAULT_PRIORITY.to_vec(),
        }
    }

    /// Choose among already computed candidates.
    pub fn choose<'a>(&self, candidates: &'a [Analysis]) -> Option<&'a Analysis> {
        self.priority
            .iter()
            .find_map(|is_class| candidates.iter().find(|a| is_class(a.pos())))
            .or_else(|| candidates.first())
    }

    /// Select the serialized parse for `token`, or [`NO_PARSE`].
    ///
    /// ```
    /// use derlem::morphology::lexicon::LexiconAnalyzer;
    /// use derlem::morphology::selector::ParseSelector;
    ///
    /// let lexicon: LexiconAnalyzer =
    ///     "yüz\tyüz+NUM+CARD\nyüz\tyüz+VERB+POS+IMP+A2SG".parse().unwrap();
    /// let selector = ParseSelector::new(&lexicon);
    /// assert_eq!(selector.select("yüz"), "yüz+VERB+POS+IMP+A2SG");
    /// assert_eq!(selector.select("xyz"), "_");
    /// ```
    pub fn select(&self, token: &str) -> String {
        let candidates = self.analyzer.analyze(token);
        self.choose(&candidates)
            .map(|analysis| analysis.parse().to_string())
            .unwrap_or_else(|| NO_PARSE.to_string())
    }

    /// Render a text as one `<S>` block per non-empty line.
    ///
    /// Each block holds `token<TAB>parse` lines and is closed by `</S>` and an
    /// empty line.
    pub fn disambiguate(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();

        for sentence in text.lines() {
            let tokens: Vec<&str> = sentence.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            lines.push("<S>".to_string());
            for token in tokens {
                lines.push(format!("{token}\t{}", self.select(token)));
            }
            lines.push("</S>".to_string());
            lines.push(String::new());
        }

        lines
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }
}
