//! Word frequencies and vocabularies per channel.
//!
//! Text runs through the [`TurkishNewsAnalyzer`] and the remaining words are
//! counted per channel and across all channels. Ties in the frequency ranking
//! keep the order in which words were first seen, so reports are stable
//! between runs.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::turkish::TurkishNewsAnalyzer;
use crate::analysis::token_filter::min_length::DEFAULT_MIN_LENGTH;
use crate::analysis::token_filter::stop::StopFilter;
use crate::corpus::document::SourceText;
use crate::error::Result;

/// Inflation-related words counted across the whole corpus.
pub const DEFAULT_INFLATION_KEYWORDS: &[&str] = &[
    "enflasyon",
    "fiyat",
    "ücret",
    "maaş",
    "ekonomi",
    "tüketici",
    "merkez",
    "banka",
    "faiz",
    "artış",
    "yüksek",
    "düşük",
    "oran",
    "gıda",
    "enerji",
    "tüfe",
    "üfe",
    "kur",
    "döviz",
    "büyüme",
];

/// Configuration for frequency analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Words shorter than this many characters are not counted.
    pub min_word_length: usize,
    /// Stop words added to the default Turkish list.
    pub extra_stopwords: Vec<String>,
    pub inflation_keywords: Vec<String>,
    /// Number of top words logged per channel.
    pub top: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        FrequencyConfig {
            min_word_length: DEFAULT_MIN_LENGTH,
            extra_stopwords: Vec::new(),
            inflation_keywords: DEFAULT_INFLATION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            top: 20,
        }
    }
}

/// Word counts that remember first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: AHashMap<String, usize>,
    order: Vec<String>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: AsRef<str> + Into<String>>(&mut self, word: S) {
        self.add_count(word, 1);
    }

    fn add_count<S: AsRef<str> + Into<String>>(&mut self, word: S, count: usize) {
        if let Some(existing) = self.counts.get_mut(word.as_ref()) {
            *existing += count;
            return;
        }
        let word = word.into();
        self.order.push(word.clone());
        self.counts.insert(word, count);
    }

    /// Add every count of `other`, in `other`'s first-seen order.
    pub fn merge(&mut self, other: &WordCounts) {
        for word in &other.order {
            self.add_count(word.as_str(), other.count(word));
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Words by count descending, ties in first-seen order.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|w| (w.as_str(), self.count(w)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Distinct words in sorted order.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.order.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Total number of counted tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Counts for one channel.
#[derive(Clone, Debug)]
pub struct ChannelStats {
    pub channel: String,
    /// Non-empty transcripts that were counted.
    pub files: usize,
    pub counts: WordCounts,
}

/// One row of the summary report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub channel: String,
    pub files: usize,
    pub unique_words: usize,
    pub total_words: usize,
}

impl From<&ChannelStats> for SummaryRow {
    fn from(stats: &ChannelStats) -> Self {
        SummaryRow {
            channel: stats.channel.clone(),
            files: stats.files,
            unique_words: stats.counts.unique(),
            total_words: stats.counts.total(),
        }
    }
}

/// Frequencies for a whole corpus.
#[derive(Clone, Debug, Default)]
pub struct FrequencyReport {
    /// Channels with at least one non-empty transcript, in corpus order.
    pub channels: Vec<ChannelStats>,
    pub all: WordCounts,
    /// Inflation keywords that occur, with their corpus-wide counts.
    pub keywords: Vec<(String, usize)>,
}

impl FrequencyReport {
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.channels.iter().map(SummaryRow::from).collect()
    }
}

/// Counts words in transcripts.
#[derive(Debug)]
pub struct FrequencyAnalyzer {
    analyzer: TurkishNewsAnalyzer,
    config: FrequencyConfig,
}

impl FrequencyAnalyzer {
    pub fn new(config: FrequencyConfig) -> Result<Self> {
        let stop_filter = StopFilter::with_extra_words(&config.extra_stopwords);
        let analyzer = TurkishNewsAnalyzer::with_options(config.min_word_length, stop_filter)?;
        Ok(FrequencyAnalyzer { analyzer, config })
    }

    pub fn config(&self) -> &FrequencyConfig {
        &self.config
    }

    /// The counted words of one text, in order.
    pub fn tokens(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.terms(text)
    }

    /// Count the words of several texts together.
    pub fn count<'t, I>(&self, texts: I) -> Result<WordCounts>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut counts = WordCounts::new();
        for text in texts {
            for word in self.tokens(text)? {
                counts.add(word);
            }
        }
        Ok(counts)
    }

    /// Count every channel of a loaded corpus.
    ///
    /// Blank transcripts are ignored. Channels with no remaining transcript do
    /// not appear in the report.
    pub fn analyze_corpus(&self, sources: &[SourceText]) -> Result<FrequencyReport> {
        let mut report = FrequencyReport::default();

        for source in sources {
            if source.text.trim().is_empty() {
                continue;
            }
            let channel = &source.document.channel;
            let needs_new = report
                .channels
                .last()
                .is_none_or(|stats| &stats.channel != channel);
            if needs_new {
                report.channels.push(ChannelStats {
                    channel: channel.clone(),
                    files: 0,
                    counts: WordCounts::new(),
                });
            }
            if let Some(stats) = report.channels.last_mut() {
                stats.files += 1;
                for word in self.tokens(&source.text)? {
                    stats.counts.add(word);
                }
            }
        }

        for stats in &report.channels {
            log::debug!(
                "{}: {} files, {} words, {} distinct",
                stats.channel,
                stats.files,
                stats.counts.total(),
                stats.counts.unique()
            );
            report.all.merge(&stats.counts);
        }

        report.keywords = self
            .config
            .inflation_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter_map(|k| {
                let count = report.all.count(&k);
                (count > 0).then_some((k, count))
            })
            .collect();

        Ok(report)
    }
}
