//! A single morphological analysis of a token.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::morphology::pos::PartOfSpeech;

/// Separator between inflectional groups in a serialized parse.
pub const DERIVATION_BOUNDARY: &str = "^DB+";

/// One candidate analysis returned by a morphological analyzer.
///
/// The serialized form follows the `root+TAG+TAG...` convention, optionally
/// split into inflectional groups by `^DB+`:
///
/// ```
/// use derlem::morphology::parse::Analysis;
/// use derlem::morphology::pos::PartOfSpeech;
///
/// let analysis = Analysis::from_parse("kitap+NOUN+A3SG+PNON+NOM^DB+ADJ+WITH");
/// assert_eq!(analysis.pos(), &PartOfSpeech::Adj);
/// assert_eq!(analysis.root(), "kitap");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Analysis {
    pos: PartOfSpeech,
    parse: String,
}

impl Analysis {
    /// Create an analysis with an explicit part of speech.
    pub fn new<S: Into<String>>(pos: PartOfSpeech, parse: S) -> Self {
        Analysis {
            pos,
            parse: parse.into(),
        }
    }

    /// Create an analysis, deriving the part of speech from the parse string.
    ///
    /// The tag is the first one of the last inflectional group. Without a
    /// derivation boundary that is the tag right after the root.
    pub fn from_parse<S: Into<String>>(parse: S) -> Self {
        let parse = parse.into();
        let pos = derive_pos(&parse);
        Analysis { pos, parse }
    }

    pub fn pos(&self) -> &PartOfSpeech {
        &self.pos
    }

    /// The serialized parse string.
    pub fn parse(&self) -> &str {
        &self.parse
    }

    /// The root, i.e. everything before the first `+`.
    pub fn root(&self) -> &str {
        self.parse.split('+').next().unwrap_or_default()
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parse)
    }
}

fn derive_pos(parse: &str) -> PartOfSpeech {
    let tag = match parse.rsplit_once(DERIVATION_BOUNDARY) {
        Some((_, last_group)) => last_group.split('+').next(),
        None => parse.split('+').nth(1),
    };

    match tag {
        Some(tag) if !tag.is_empty() => PartOfSpeech::from_tag(tag),
        _ => PartOfSpeech::Other(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_from_simple_parse() {
        let analysis = Analysis::from_parse("gel+VERB+POS+PAST+A3SG");
        assert_eq!(analysis.pos(), &PartOfSpeech::Verb);
        assert_eq!(analysis.root(), "gel");
        assert_eq!(analysis.to_string(), "gel+VERB+POS+PAST+A3SG");
    }

    #[test]
    fn test_pos_from_last_inflectional_group() {
        let analysis = Analysis::from_parse("zam+NOUN+A3SG+PNON+NOM^DB+VERB+ACQUIRE+POS+PAST+A3SG");
        assert_eq!(analysis.pos(), &PartOfSpeech::Verb);
    }

    #[test]
    fn test_parse_without_tags() {
        let analysis = Analysis::from_parse("zam");
        assert_eq!(analysis.pos(), &PartOfSpeech::Other(String::new()));
        assert_eq!(analysis.root(), "zam");
    }

    #[test]
    fn test_explicit_pos_wins() {
        let analysis = Analysis::new(PartOfSpeech::Noun, "yüksel+VERB+POS");
        assert_eq!(analysis.pos(), &PartOfSpeech::Noun);
        assert_eq!(analysis.parse(), "yüksel+VERB+POS");
    }
}
