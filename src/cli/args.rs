//! Command line argument parsing for the derlem CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::corpus::filter::FilterMode;
use crate::spelling::proper_noun::ProperNounPolicy;

/// derlem - normalization tools for Turkish news transcripts
#[derive(Parser, Debug, Clone)]
#[command(name = "derlem")]
#[command(about = "Normalization tools for Turkish news transcript corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DerlemArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "DERLEM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Scan documents in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Output format for the command summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DerlemArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report tokens the analyzer rejects
    Detect(DetectArgs),

    /// Report apostrophe repairs for rejected tokens
    Normalize(NormalizeArgs),

    /// Re-segment transcripts into one sentence per line
    Split(SplitArgs),

    /// Write the selected parse of every token
    Disambiguate(DisambiguateArgs),

    /// Keep only keyword passages of each transcript
    Filter(FilterArgs),

    /// Word frequencies and vocabularies per channel
    Frequencies(FrequenciesArgs),

    /// Show how individual tokens are analyzed
    Analyze(AnalyzeArgs),
}

/// Arguments for error detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Corpus directory (one subdirectory per channel)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Lexicon file (surface<TAB>parse per line)
    #[arg(short, long, value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "errors.csv")]
    pub output: PathBuf,

    /// Which tokens are collected as proper-noun candidates
    #[arg(long)]
    pub policy: Option<Policy>,
}

/// Arguments for apostrophe normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    #[arg(short, long, value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "normalized.csv")]
    pub output: PathBuf,

    #[arg(long)]
    pub policy: Option<Policy>,
}

/// Arguments for sentence splitting
#[derive(Parser, Debug, Clone)]
pub struct SplitArgs {
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    #[arg(short, long, value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Output directory (default: <CORPUS>-Split)
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,
}

impl SplitArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| sibling_dir(&self.corpus, "Split"))
    }
}

/// Arguments for parse selection
#[derive(Parser, Debug, Clone)]
pub struct DisambiguateArgs {
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    #[arg(short, long, value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Output directory (default: <CORPUS>-With-Selected-Parse)
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,
}

impl DisambiguateArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| sibling_dir(&self.corpus, "With-Selected-Parse"))
    }
}

/// Arguments for keyword filtering
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Filtering mode
    #[arg(short = 'm', long, default_value = "blocks")]
    pub mode: Mode,

    /// Output directory (default: <CORPUS>-Filtered)
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Skip documents already present in this corpus
    #[arg(long, value_name = "DIR")]
    pub exclude: Option<PathBuf>,

    /// Keyword prefix (repeatable, replaces the configured list)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,
}

impl FilterArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| sibling_dir(&self.corpus, "Filtered"))
    }
}

/// Arguments for frequency analysis
#[derive(Parser, Debug, Clone)]
pub struct FrequenciesArgs {
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Output directory
    #[arg(short = 'd', long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Number of top words shown per channel
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// Arguments for single-token analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(short, long, value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Tokens to analyze
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
}

/// Proper-noun collection policy
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Tokens starting with an upper-case letter
    Capitalized,
    /// Every token
    AllTokens,
}

impl From<Policy> for ProperNounPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Capitalized => ProperNounPolicy::Capitalized,
            Policy::AllTokens => ProperNounPolicy::AllTokens,
        }
    }
}

/// Keyword filtering mode
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keyword lines with surrounding context
    Blocks,
    /// Whole paragraphs mentioning a keyword
    Paragraphs,
}

impl From<Mode> for FilterMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Blocks => FilterMode::Blocks,
            Mode::Paragraphs => FilterMode::Paragraphs,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// `<parent>/<name>-<suffix>` next to the corpus directory.
///
/// An existing corpus path is canonicalized first, so `.` and `x/..` name
/// the real directory and the output never lands inside the corpus.
fn sibling_dir(corpus: &Path, suffix: &str) -> PathBuf {
    let corpus = std::fs::canonicalize(corpus).unwrap_or_else(|_| corpus.to_path_buf());
    let name = corpus
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "corpus".to_string());
    corpus.with_file_name(format!("{name}-{suffix}"))
}
