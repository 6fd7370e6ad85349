//! Apostrophe repair for unrecognized tokens.
//!
//! Transcribers often drop the apostrophe between a root and its suffix
//! ("zamlandı" for "zam'landı", "TÜİKin" for "TÜİK'in"). The repairer walks
//! the split points of a token from left to right and inserts an apostrophe at
//! the first one whose prefix the analyzer accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::morphology::MorphologicalAnalyzer;
use crate::spelling::cleaner::APOSTROPHE;

/// What the repairer did to a token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairOutcome {
    /// The token was accepted as-is, or no split point worked.
    Unchanged(String),
    /// The upper-case form of the whole token was accepted.
    Uppercased(String),
    /// An apostrophe was inserted after `root`.
    Split {
        root: String,
        suffix: String,
        repaired: String,
    },
}

impl RepairOutcome {
    /// The repaired form (or the original token).
    pub fn as_str(&self) -> &str {
        match self {
            RepairOutcome::Unchanged(token) => token,
            RepairOutcome::Uppercased(token) => token,
            RepairOutcome::Split { repaired, .. } => repaired,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            RepairOutcome::Unchanged(token) => token,
            RepairOutcome::Uppercased(token) => token,
            RepairOutcome::Split { repaired, .. } => repaired,
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self, RepairOutcome::Unchanged(_))
    }

    /// Short label of the outcome kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RepairOutcome::Unchanged(_) => "unchanged",
            RepairOutcome::Uppercased(_) => "uppercased",
            RepairOutcome::Split { .. } => "split",
        }
    }
}

impl fmt::Display for RepairOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recovers a parsable root by inserting an apostrophe.
pub struct RootSplitRepairer<A: MorphologicalAnalyzer> {
    analyzer: A,
}

impl<A: MorphologicalAnalyzer> RootSplitRepairer<A> {
    pub fn new(analyzer: A) -> Self {
        RootSplitRepairer { analyzer }
    }

    /// Repair `token`, returning the original when nothing works.
    ///
    /// ```
    /// use derlem::morphology::lexicon::LexiconAnalyzer;
    /// use derlem::spelling::repair::RootSplitRepairer;
    ///
    /// let lexicon: LexiconAnalyzer = "zam\tzam+NOUN+A3SG+PNON+NOM".parse().unwrap();
    /// let repairer = RootSplitRepairer::new(&lexicon);
    /// assert_eq!(repairer.repair("zamlandı"), "zam'landı");
    /// assert_eq!(repairer.repair("qwerty"), "qwerty");
    /// ```
    pub fn repair(&self, token: &str) -> String {
        self.repair_outcome(token).into_string()
    }

    /// Repair `token` and report how.
    pub fn repair_outcome(&self, token: &str) -> RepairOutcome {
        if self.analyzer.accepts(token) {
            return RepairOutcome::Unchanged(token.to_string());
        }

        let upper = token.to_uppercase();
        if self.analyzer.accepts(&upper) {
            return RepairOutcome::Uppercased(upper);
        }

        // Interior char boundaries only, so neither side is empty.
        for (i, _) in token.char_indices().skip(1) {
            let (root, suffix) = token.split_at(i);

            if self.analyzer.accepts(root) {
                return split(root.to_string(), suffix);
            }

            let root_upper = root.to_uppercase();
            if self.analyzer.accepts(&root_upper) {
                return split(root_upper, suffix);
            }
        }

        RepairOutcome::Unchanged(token.to_string())
    }
}

fn split(root: String, suffix: &str) -> RepairOutcome {
    let repaired = format!("{root}{APOSTROPHE}{suffix}");
    RepairOutcome::Split {
        root,
        suffix: suffix.to_string(),
        repaired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::lexicon::LexiconAnalyzer;

    fn lexicon() -> LexiconAnalyzer {
        LexiconAnalyzer::from_entries([
            ("zam", "zam+NOUN+A3SG+PNON+NOM"),
            ("zamla", "zamla+VERB+POS+IMP+A2SG"),
            ("TCMB", "tcmb+NOUN+ABBR+A3SG+PNON+NOM"),
            ("AB", "ab+NOUN+ABBR+A3SG+PNON+NOM"),
            ("enflasyon", "enflasyon+NOUN+A3SG+PNON+NOM"),
        ])
    }

    #[test]
    fn test_accepted_token_is_unchanged() {
        let lexicon = lexicon();
        let repairer = RootSplitRepairer::new(&lexicon);
        assert_eq!(
            repairer.repair_outcome("enflasyon"),
            RepairOutcome::Unchanged("enflasyon".to_string())
        );
    }

    #[test]
    fn test_first_accepting_split_wins() {
        let lexicon = lexicon();
        let repairer = RootSplitRepairer::new(&lexicon);
        let outcome = repairer.repair_outcome("zamlandı");
        assert_eq!(
            outcome,
            RepairOutcome::Split {
                root: "zam".to_string(),
                suffix: "landı".to_string(),
                repaired: "zam'landı".to_string(),
            }
        );
        assert!(outcome.is_changed());
        assert_eq!(outcome.kind(), "split");
    }

    #[test]
    fn test_uppercase_whole_token() {
        let lexicon = lexicon();
        let repairer = RootSplitRepairer::new(&lexicon);
        assert_eq!(
            repairer.repair_outcome("ab"),
            RepairOutcome::Uppercased("AB".to_string())
        );
    }

    #[test]
    fn test_uppercase_root() {
        let lexicon = lexicon();
        let repairer = RootSplitRepairer::new(&lexicon);
        assert_eq!(repairer.repair("tcmbnin"), "TCMB'nin");
    }

    #[test]
    fn test_unrepairable_token_passes_through() {
        let lexicon = lexicon();
        let repairer = RootSplitRepairer::new(&lexicon);
        let outcome = repairer.repair_outcome("xyzzy");
        assert!(!outcome.is_changed());
        assert_eq!(outcome.kind(), "unchanged");
        assert_eq!(outcome.to_string(), "xyzzy");
        assert_eq!(repairer.repair(""), "");
    }

    #[test]
    fn test_multibyte_split_points() {
        let lexicon = LexiconAnalyzer::from_entries([("çığ", "çığ+NOUN+A3SG+PNON+NOM")]);
        let repairer = RootSplitRepairer::new(&lexicon);
        assert_eq!(repairer.repair("çığdan"), "çığ'dan");
    }
}
