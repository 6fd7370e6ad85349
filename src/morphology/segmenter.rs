//! Verb-keyed sentence segmentation.
//!
//! Turkish is verb-final, so a finite verb is a decent guess for the end of a
//! clause in unpunctuated transcripts. A boundary goes right after any token
//! whose first analysis is a verb. The following token's capitalization is
//! not consulted.
//!
//! Full stops already in the text are boundaries too and are dropped from the
//! output. A token with trailing stops is looked up without them.

use crate::morphology::MorphologicalAnalyzer;

const SENTENCE_END: char = '.';

/// Splits token streams into sentence-like groups.
pub struct SentenceSegmenter<A: MorphologicalAnalyzer> {
    analyzer: A,
}

impl<A: MorphologicalAnalyzer> SentenceSegmenter<A> {
    pub fn new(analyzer: A) -> Self {
        SentenceSegmenter { analyzer }
    }

    /// Check whether a boundary follows `token`.
    pub fn ends_sentence(&self, token: &str) -> bool {
        self.analyzer
            .analyze(token)
            .first()
            .is_some_and(|analysis| analysis.pos().is_verb())
    }

    /// Group tokens into sentences, each joined by single spaces.
    ///
    /// Groups without any non-whitespace content are dropped.
    pub fn segment<'t, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut sentences = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for token in tokens {
            let verb = self.ends_sentence(token.trim_end_matches(SENTENCE_END));

            // Every stop inside the token closes the current group.
            let mut pieces = token.split(SENTENCE_END);
            if let Some(first) = pieces.next() {
                current.push(first);
            }
            for piece in pieces {
                push_sentence(&mut sentences, &current);
                current.clear();
                current.push(piece);
            }

            if verb {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }
        push_sentence(&mut sentences, &current);

        sentences
    }

    /// Segment a whole text, splitting it on whitespace first.
    ///
    /// ```
    /// use derlem::morphology::lexicon::LexiconAnalyzer;
    /// use derlem::morphology::segmenter::SentenceSegmenter;
    ///
    /// let lexicon: LexiconAnalyzer = "arttı\tart+VERB+POS+PAST+A3SG".parse().unwrap();
    /// let segmenter = SentenceSegmenter::new(&lexicon);
    /// assert_eq!(
    ///     segmenter.segment_text("fiyatlar arttı bugün de"),
    ///     vec!["fiyatlar arttı", "bugün de"]
    /// );
    /// ```
    pub fn segment_text(&self, text: &str) -> Vec<String> {
        self.segment(text.split_whitespace())
    }
}

fn push_sentence(sentences: &mut Vec<String>, tokens: &[&str]) {
    let tokens: Vec<&str> = tokens.iter().copied().filter(|t| !t.is_empty()).collect();
    let sentence = tokens.join(" ");
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::lexicon::LexiconAnalyzer;

    fn lexicon() -> LexiconAnalyzer {
        LexiconAnalyzer::from_entries([
            ("arttı", "art+VERB+POS+PAST+A3SG"),
            ("yüz", "yüz+NOUN+A3SG+PNON+NOM"),
            ("yüz", "yüz+VERB+POS+IMP+A2SG"),
            ("Enflasyon", "enflasyon+NOUN+A3SG+PNON+NOM"),
        ])
    }

    #[test]
    fn test_single_verb_gives_two_sentences() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        let sentences = segmenter.segment(["Enflasyon", "yine", "arttı", "Merkez", "Bankası"]);
        assert_eq!(sentences, vec!["Enflasyon yine arttı", "Merkez Bankası"]);
    }

    #[test]
    fn test_only_first_analysis_counts() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        assert!(!segmenter.ends_sentence("yüz"));
        assert!(segmenter.ends_sentence("arttı"));
        assert!(!segmenter.ends_sentence("bilinmeyen"));
    }

    #[test]
    fn test_trailing_verb_leaves_no_empty_group() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        let sentences = segmenter.segment_text("arttı arttı\n\n  arttı  ");
        assert_eq!(sentences, vec!["arttı", "arttı", "arttı"]);
    }

    #[test]
    fn test_empty_input() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        assert!(segmenter.segment_text("   \n ").is_empty());
        assert!(segmenter.segment(["", " "]).is_empty());
    }

    #[test]
    fn test_full_stop_ends_a_sentence() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        assert_eq!(
            segmenter.segment_text("Fiyatlar arttı. Bugün zam geldi"),
            vec!["Fiyatlar arttı", "Bugün zam geldi"]
        );
        assert_eq!(
            segmenter.segment_text("Merkez Bankası. Faiz sabit... Enflasyon"),
            vec!["Merkez Bankası", "Faiz sabit", "Enflasyon"]
        );
    }

    #[test]
    fn test_stop_inside_a_token_splits_it() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        assert_eq!(segmenter.segment(["yüzde", "3.5"]), vec!["yüzde 3", "5"]);
    }

    #[test]
    fn test_capitalization_is_ignored() {
        let lexicon = lexicon();
        let segmenter = SentenceSegmenter::new(&lexicon);
        let sentences = segmenter.segment_text("fiyat arttı ama yine de");
        assert_eq!(sentences, vec!["fiyat arttı", "ama yine de"]);
    }
}
