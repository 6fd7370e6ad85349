use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::Result;

/// Everything that is not a Latin or Turkish letter or whitespace.
pub const NON_TURKISH_LETTER_PATTERN: &str = r"[^a-zA-ZığüşöçĞÜŞÖÇİ\s]+";

/// A char filter that replaces characters matching a regex pattern.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Deletes digits, punctuation and any letter outside the Turkish
    /// alphabet.
    pub fn non_turkish_letters() -> Result<Self> {
        Self::new(NON_TURKISH_LETTER_PATTERN, "")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);

            let replacement_start = output.len();
            output.push_str(&self.replacement);
            let replacement_end = output.len();

            // Same-length replacements keep offsets linear.
            if m.len() != replacement_end - replacement_start {
                transformations.push(Transformation::new(
                    m.start(),
                    m.end(),
                    replacement_start,
                    replacement_end,
                ));
            }

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
