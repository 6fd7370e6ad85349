//! Keyword filtering of transcripts.
//!
//! Two modes narrow a corpus down to the passages about a topic:
//!
//! - **blocks**: lines containing a keyword-prefixed word, merged when close
//!   together and padded with surrounding lines;
//! - **paragraphs**: blank-line separated paragraphs containing a keyword
//!   anywhere.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DerlemError, Result};

/// How a document is narrowed down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    Blocks,
    Paragraphs,
}

/// Configuration for keyword filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Lower-case keyword prefixes.
    pub keywords: Vec<String>,
    /// Lines of context added before and after each block.
    pub window: usize,
    /// Matching lines at most this far apart share a block.
    pub merge_gap: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            keywords: vec!["enflasyon".to_string(), "zam".to_string()],
            window: 2,
            merge_gap: 5,
        }
    }
}

/// Extracts keyword passages from transcripts.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    pattern: Regex,
    keywords: Vec<String>,
    window: usize,
    merge_gap: usize,
}

impl KeywordFilter {
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let keywords: Vec<String> = config
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(DerlemError::config("at least one filter keyword is required"));
        }

        let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
        let pattern = Regex::new(&format!(r"\b(?:{})\w*", alternatives.join("|")))?;

        Ok(KeywordFilter {
            pattern,
            keywords,
            window: config.window,
            merge_gap: config.merge_gap,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Check whether a line has a word starting with a keyword.
    pub fn line_matches(&self, line: &str) -> bool {
        self.pattern.is_match(&line.to_lowercase())
    }

    /// Extract keyword blocks from a document.
    ///
    /// ```
    /// use derlem::corpus::filter::{FilterConfig, KeywordFilter};
    ///
    /// let filter = KeywordFilter::new(&FilterConfig::default()).unwrap();
    /// let text = "a\nb\nc\nZamlar geldi\nd\ne\nf\ng\nh\ni";
    /// assert_eq!(filter.extract_blocks(text), vec!["b\nc\nZamlar geldi\nd\ne"]);
    /// ```
    pub fn extract_blocks(&self, text: &str) -> Vec<String> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let hits: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.line_matches(line))
            .map(|(i, _)| i)
            .collect();

        merge_hits(&hits, self.merge_gap)
            .into_iter()
            .map(|(first, last)| {
                let start = first.saturating_sub(self.window);
                let end = lines.len().min(last + self.window + 1);
                lines[start..end].join("\n")
            })
            .collect()
    }

    /// Blocks joined by blank lines, or `None` when nothing matched.
    pub fn filter_blocks(&self, text: &str) -> Option<String> {
        let blocks = self.extract_blocks(text);
        if blocks.is_empty() {
            None
        } else {
            Some(blocks.join("\n\n"))
        }
    }

    /// Keep only paragraphs that mention a keyword.
    pub fn filter_paragraphs(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n");
        text.split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter(|p| {
                let lower = p.to_lowercase();
                self.keywords.iter().any(|k| lower.contains(k.as_str()))
            })
            .collect::<Vec<&str>>()
            .join("\n\n")
    }
}

/// Group sorted hit indices into `(first, last)` runs.
fn merge_hits(hits: &[usize], merge_gap: usize) -> Vec<(usize, usize)> {
    let mut blocks = Vec::new();
    let mut iter = hits.iter().copied();
    let Some(first) = iter.next() else {
        return blocks;
    };

    let (mut start, mut last) = (first, first);
    for hit in iter {
        if hit - last <= merge_gap {
            last = hit;
        } else {
            blocks.push((start, last));
            start = hit;
            last = hit;
        }
    }
    blocks.push((start, last));
    blocks
}
