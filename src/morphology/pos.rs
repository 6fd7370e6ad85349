//! Part-of-speech tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Part-of-speech class of a morphological analysis.
///
/// Tags are parsed case-insensitively, so `VERB`, `Verb` and `verb` all map to
/// [`PartOfSpeech::Verb`]. Tags the crate does not reason about are kept
/// verbatim in [`PartOfSpeech::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adj,
    Num,
    Adv,
    Pron,
    Conj,
    Postp,
    Det,
    Interj,
    Ques,
    Punc,
    Other(String),
}

impl PartOfSpeech {
    /// Parse a tag as produced by the analyzer.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "VERB" => PartOfSpeech::Verb,
            "NOUN" => PartOfSpeech::Noun,
            "ADJ" => PartOfSpeech::Adj,
            "NUM" => PartOfSpeech::Num,
            "ADV" => PartOfSpeech::Adv,
            "PRON" => PartOfSpeech::Pron,
            "CONJ" => PartOfSpeech::Conj,
            "POSTP" => PartOfSpeech::Postp,
            "DET" => PartOfSpeech::Det,
            "INTERJ" => PartOfSpeech::Interj,
            "QUES" => PartOfSpeech::Ques,
            "PUNC" => PartOfSpeech::Punc,
            _ => PartOfSpeech::Other(tag.to_string()),
        }
    }

    /// The canonical upper-case tag.
    pub fn as_str(&self) -> &str {
        match self {
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Conj => "CONJ",
            PartOfSpeech::Postp => "POSTP",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Interj => "INTERJ",
            PartOfSpeech::Ques => "QUES",
            PartOfSpeech::Punc => "PUNC",
            PartOfSpeech::Other(tag) => tag,
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(self, PartOfSpeech::Verb)
    }
}

impl FromStr for PartOfSpeech {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PartOfSpeech::from_tag(s))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
