//! Lexicon-backed morphological analyzer.
//!
//! A lexicon is a UTF-8 text file with one analysis per line:
//!
//! ```text
//! # surface <TAB> parse
//! zam	zam+NOUN+A3SG+PNON+NOM
//! # surface <TAB> POS <TAB> parse
//! arttı	VERB	art+VERB+POS+PAST+A3SG
//! ```
//!
//! Several lines with the same surface form produce several analyses, in file
//! order. Lookup is exact and case-sensitive.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use ahash::AHashMap;

use crate::error::{DerlemError, Result};
use crate::morphology::MorphologicalAnalyzer;
use crate::morphology::parse::Analysis;
use crate::morphology::pos::PartOfSpeech;

/// A morphological analyzer that looks tokens up in an in-memory lexicon.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    entries: AHashMap<String, Vec<Analysis>>,
    analysis_count: usize,
}

impl LexiconAnalyzer {
    /// Create an empty lexicon that recognizes nothing.
    pub fn new() -> Self {
        LexiconAnalyzer::default()
    }

    /// Build a lexicon from `(surface, parse)` pairs.
    pub fn from_entries<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        let mut lexicon = LexiconAnalyzer::new();
        for (surface, parse) in entries {
            lexicon.insert(surface, Analysis::from_parse(parse));
        }
        lexicon
    }

    /// Load a lexicon file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut lexicon = LexiconAnalyzer::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some((surface, analysis)) = parse_line(&line, index + 1)? {
                lexicon.insert(surface, analysis);
            }
        }

        log::info!(
            "Loaded lexicon {}: {} surface forms, {} analyses",
            path.display(),
            lexicon.len(),
            lexicon.analysis_count()
        );
        Ok(lexicon)
    }

    /// Add one analysis for a surface form.
    pub fn insert<S: Into<String>>(&mut self, surface: S, analysis: Analysis) {
        self.entries.entry(surface.into()).or_default().push(analysis);
        self.analysis_count += 1;
    }

    /// Number of distinct surface forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of analyses across all surface forms.
    pub fn analysis_count(&self) -> usize {
        self.analysis_count
    }
}

impl MorphologicalAnalyzer for LexiconAnalyzer {
    fn analyze(&self, token: &str) -> Vec<Analysis> {
        self.entries.get(token).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn accepts(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }
}

impl FromStr for LexiconAnalyzer {
    type Err = DerlemError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lexicon = LexiconAnalyzer::new();
        for (index, line) in s.lines().enumerate() {
            if let Some((surface, analysis)) = parse_line(line, index + 1)? {
                lexicon.insert(surface, analysis);
            }
        }
        Ok(lexicon)
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

fn parse_line(line: &str, line_number: usize) -> Result<Option<(String, Analysis)>> {
    let mut line = line.trim_end_matches(['\r', '\n']);
    if line_number == 1 {
        line = line.trim_start_matches(BYTE_ORDER_MARK);
    }
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
    let analysis = match columns.as_slice() {
        [surface, parse] if !surface.is_empty() && !parse.is_empty() => {
            (surface.to_string(), Analysis::from_parse(*parse))
        }
        [surface, pos, parse] if !surface.is_empty() && !parse.is_empty() => (
            surface.to_string(),
            Analysis::new(PartOfSpeech::from_tag(pos), *parse),
        ),
        _ => {
            return Err(DerlemError::lexicon(format!(
                "line {line_number}: expected `surface<TAB>parse` or `surface<TAB>POS<TAB>parse`"
            )));
        }
    };

    Ok(Some(analysis))
}
