//! Error detection and repair over whole documents.
//!
//! The detector walks each line of a transcript and cleans each word. Words
//! the analyzer accepts are left alone. For any other word it:
//!
//! 1. emits an [`ErrorRecord`] unless the word is a suffixed proper noun or an
//!    acronym;
//! 2. runs the apostrophe repairer and emits a [`NormalizationRecord`] when the
//!    repaired form differs from the cleaned word.
//!
//! The two outputs are independent. A proper noun that escapes the error
//! report can still receive an apostrophe repair.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::document::{Document, SourceText};
use crate::morphology::MorphologicalAnalyzer;
use crate::spelling::cleaner::TokenCleaner;
use crate::spelling::proper_noun::{
    ProperNounConfig, ProperNounSet, ProperNounSetBuilder, is_acronym,
};
use crate::spelling::record::{ErrorRecord, NormalizationRecord, context_window};
use crate::spelling::repair::RootSplitRepairer;

/// Which record kinds a scan produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emit {
    Errors,
    Normalizations,
    #[default]
    Both,
}

impl Emit {
    pub fn errors(self) -> bool {
        matches!(self, Emit::Errors | Emit::Both)
    }

    pub fn normalizations(self) -> bool {
        matches!(self, Emit::Normalizations | Emit::Both)
    }
}

/// Configuration for the detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Raw words kept on each side of a flagged word.
    pub context_window: usize,
    /// Chosen by the command that runs the scan, never read from a config
    /// file.
    #[serde(skip)]
    pub emit: Emit,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        DetectionConfig {
            context_window: 5,
            emit: Emit::Both,
        }
    }
}

/// Records found in one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentReport {
    pub errors: Vec<ErrorRecord>,
    pub normalizations: Vec<NormalizationRecord>,
}

impl DocumentReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.normalizations.is_empty()
    }
}

/// Records found in a corpus, in corpus order.
#[derive(Clone, Debug, Default)]
pub struct DetectionRun {
    pub errors: Vec<ErrorRecord>,
    pub normalizations: Vec<NormalizationRecord>,
    pub documents: usize,
    pub proper_nouns: usize,
}

/// Scans documents against a frozen proper-noun set.
pub struct Detector<'a, A: MorphologicalAnalyzer> {
    analyzer: &'a A,
    names: &'a ProperNounSet,
    cleaner: TokenCleaner,
    repairer: RootSplitRepairer<&'a A>,
    config: DetectionConfig,
}

impl<'a, A: MorphologicalAnalyzer> Detector<'a, A> {
    pub fn new(
        analyzer: &'a A,
        names: &'a ProperNounSet,
        cleaner: TokenCleaner,
        config: DetectionConfig,
    ) -> Self {
        Detector {
            analyzer,
            names,
            cleaner,
            repairer: RootSplitRepairer::new(analyzer),
            config,
        }
    }

    /// Scan one document.
    pub fn scan_document(&self, document: &Document, text: &str) -> DocumentReport {
        let mut report = DocumentReport::default();
        let emit = self.config.emit;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let words: Vec<&str> = line.split_whitespace().collect();
            for (i, raw) in words.iter().enumerate() {
                let cleaned = self.cleaner.clean_keep_apostrophe(raw);
                if cleaned.is_empty() || self.analyzer.accepts(&cleaned) {
                    continue;
                }

                let excused = self.names.is_suffixed_proper_noun(&cleaned) || is_acronym(raw);
                let repaired = if emit.normalizations() {
                    Some(self.repairer.repair(&cleaned))
                } else {
                    None
                };
                let flagged = emit.errors() && !excused;
                let changed = repaired.as_ref().filter(|r| **r != cleaned);
                if !flagged && changed.is_none() {
                    continue;
                }

                let context = context_window(&words, i, self.config.context_window);
                if let Some(normalized) = changed {
                    report.normalizations.push(NormalizationRecord {
                        channel: document.channel.clone(),
                        file: document.file_name.clone(),
                        token: cleaned.clone(),
                        normalized: normalized.clone(),
                        context: context.clone(),
                    });
                }
                if flagged {
                    report.errors.push(ErrorRecord {
                        channel: document.channel.clone(),
                        file: document.file_name.clone(),
                        token: cleaned,
                        context,
                    });
                }
            }
        }

        log::debug!(
            "{}/{}: {} errors, {} normalizations",
            document.channel,
            document.file_name,
            report.errors.len(),
            report.normalizations.len()
        );
        report
    }
}

/// Collect proper-noun candidates from every document, then freeze the set.
pub fn build_proper_nouns(
    sources: &[SourceText],
    config: &ProperNounConfig,
    cleaner: &TokenCleaner,
) -> ProperNounSet {
    let mut builder = ProperNounSetBuilder::with_config(config.clone(), cleaner.clone());
    for source in sources {
        builder.observe_text(&source.text);
    }
    builder.freeze()
}

/// Run both phases over a loaded corpus.
///
/// With `parallel` the scan phase runs on the rayon pool. Reports are
/// collected in corpus order either way.
pub fn detect<A: MorphologicalAnalyzer>(
    analyzer: &A,
    sources: &[SourceText],
    proper_nouns: &ProperNounConfig,
    cleaner: &TokenCleaner,
    config: &DetectionConfig,
    parallel: bool,
) -> DetectionRun {
    let names = build_proper_nouns(sources, proper_nouns, cleaner);
    log::info!("Collected {} proper-noun forms", names.len());

    let detector = Detector::new(analyzer, &names, cleaner.clone(), config.clone());
    let reports: Vec<DocumentReport> = if parallel {
        sources
            .par_iter()
            .map(|s| detector.scan_document(&s.document, &s.text))
            .collect()
    } else {
        sources
            .iter()
            .map(|s| detector.scan_document(&s.document, &s.text))
            .collect()
    };

    let mut run = DetectionRun {
        documents: sources.len(),
        proper_nouns: names.len(),
        ..Default::default()
    };
    for report in reports {
        run.errors.extend(report.errors);
        run.normalizations.extend(report.normalizations);
    }
    run
}
