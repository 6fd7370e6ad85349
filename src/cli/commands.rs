//! Command implementations for the derlem CLI.

use std::path::Path;

use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::corpus::document::{Corpus, SourceText};
use crate::corpus::filter::{FilterMode, KeywordFilter};
use crate::corpus::frequency::FrequencyAnalyzer;
use crate::error::Result;
use crate::morphology::MorphologicalAnalyzer;
use crate::morphology::lexicon::LexiconAnalyzer;
use crate::morphology::segmenter::SentenceSegmenter;
use crate::morphology::selector::{NO_PARSE, ParseSelector};
use crate::report;
use crate::spelling::cleaner::TokenCleaner;
use crate::spelling::detector::{DetectionRun, Emit, detect};
use crate::spelling::proper_noun::is_acronym;
use crate::spelling::repair::RootSplitRepairer;

/// Execute a CLI command.
pub fn execute_command(args: DerlemArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Detect(detect_args) => run_detect(detect_args, config, &args),
        Command::Normalize(normalize_args) => run_normalize(normalize_args, config, &args),
        Command::Split(split_args) => run_split(split_args, config, &args),
        Command::Disambiguate(parse_args) => run_disambiguate(parse_args, config, &args),
        Command::Filter(filter_args) => run_filter(filter_args, config, &args),
        Command::Frequencies(freq_args) => run_frequencies(freq_args, config, &args),
        Command::Analyze(analyze_args) => run_analyze(analyze_args, config, &args),
    }
}

/// Load the configuration file, if any, and apply global flag overrides.
fn load_config(args: &DerlemArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn load_corpus(path: &Path) -> Result<Vec<SourceText>> {
    let corpus = Corpus::open(path)?;
    Ok(corpus.load())
}

fn run_detection(
    corpus: &Path,
    lexicon: &Path,
    policy: Option<Policy>,
    emit: Emit,
    mut config: Config,
) -> Result<DetectionRun> {
    if let Some(policy) = policy {
        config.proper_nouns.policy = policy.into();
    }
    config.detection.emit = emit;

    let analyzer = LexiconAnalyzer::load_from_file(lexicon)?;
    let sources = load_corpus(corpus)?;
    let cleaner = TokenCleaner::with_config(&config.cleaner);

    Ok(detect(
        &analyzer,
        &sources,
        &config.proper_nouns,
        &cleaner,
        &config.detection,
        config.parallel,
    ))
}

/// Report unrecognized tokens.
fn run_detect(args: &DetectArgs, config: Config, cli_args: &DerlemArgs) -> Result<()> {
    let bom = config.output.bom;
    let run = run_detection(&args.corpus, &args.lexicon, args.policy, Emit::Errors, config)?;
    let records = report::write_errors(&args.output, &run.errors, bom)?;

    output_result(
        &format!(
            "Found {} unrecognized tokens in {} documents, written to {}",
            records,
            run.documents,
            args.output.display()
        ),
        &DetectionSummary {
            documents: run.documents,
            proper_nouns: run.proper_nouns,
            records,
            output: args.output.display().to_string(),
        },
        cli_args,
    )
}

/// Report apostrophe repairs.
fn run_normalize(args: &NormalizeArgs, config: Config, cli_args: &DerlemArgs) -> Result<()> {
    let bom = config.output.bom;
    let run = run_detection(
        &args.corpus,
        &args.lexicon,
        args.policy,
        Emit::Normalizations,
        config,
    )?;
    let records = report::write_normalizations(&args.output, &run.normalizations, bom)?;

    output_result(
        &format!(
            "Repaired {} tokens in {} documents, written to {}",
            records,
            run.documents,
            args.output.display()
        ),
        &DetectionSummary {
            documents: run.documents,
            proper_nouns: run.proper_nouns,
            records,
            output: args.output.display().to_string(),
        },
        cli_args,
    )
}

/// Apply `render` to every source, on the rayon pool when `parallel` is set.
/// Results keep corpus order.
fn render_all<F>(sources: &[SourceText], parallel: bool, render: F) -> Vec<Vec<String>>
where
    F: Fn(&SourceText) -> Vec<String> + Sync + Send,
{
    if parallel {
        sources.par_iter().map(&render).collect()
    } else {
        sources.iter().map(&render).collect()
    }
}

/// Write one sentence per line for every document.
fn run_split(args: &SplitArgs, config: Config, cli_args: &DerlemArgs) -> Result<()> {
    let analyzer = LexiconAnalyzer::load_from_file(&args.lexicon)?;
    let sources = load_corpus(&args.corpus)?;
    let output_dir = args.output_dir();

    let segmenter = SentenceSegmenter::new(&analyzer);
    let rendered = render_all(&sources, config.parallel, |source| {
        segmenter.segment_text(&source.text)
    });

    let mut sentences = 0;
    for (source, lines) in sources.iter().zip(&rendered) {
        sentences += report::write_lines(report::mirror_path(&output_dir, &source.document), lines)?;
    }

    output_result(
        &format!(
            "Split {} documents into {} sentences under {}",
            sources.len(),
            sentences,
            output_dir.display()
        ),
        &SplitSummary {
            documents: sources.len(),
            sentences,
            output_dir: output_dir.display().to_string(),
        },
        cli_args,
    )
}

/// Write the selected parse of every token.
fn run_disambiguate(args: &DisambiguateArgs, config: Config, cli_args: &DerlemArgs) -> Result<()> {
    let analyzer = LexiconAnalyzer::load_from_file(&args.lexicon)?;
    let sources = load_corpus(&args.corpus)?;
    let output_dir = args.output_dir();

    let selector = ParseSelector::new(&analyzer);
    let rendered = render_all(&sources, config.parallel, |source| {
        selector.disambiguate(&source.text)
    });

    let no_parse_suffix = format!("\t{NO_PARSE}");
    let (mut sentences, mut tokens, mut unparsed) = (0, 0, 0);
    for (source, lines) in sources.iter().zip(&rendered) {
        for line in lines {
            if line == "<S>" {
                sentences += 1;
            } else if line.contains('\t') {
                tokens += 1;
                if line.ends_with(&no_parse_suffix) {
                    unparsed += 1;
                }
            }
        }
        report::write_lines(report::mirror_path(&output_dir, &source.document), lines)?;
    }

    output_result(
        &format!(
            "Selected parses for {} tokens ({} without analysis) under {}",
            tokens,
            unparsed,
            output_dir.display()
        ),
        &DisambiguationSummary {
            documents: sources.len(),
            sentences,
            tokens,
            unparsed,
            output_dir: output_dir.display().to_string(),
        },
        cli_args,
    )
}

/// Keep the keyword passages of every document.
fn run_filter(args: &FilterArgs, mut config: Config, cli_args: &DerlemArgs) -> Result<()> {
    if !args.keywords.is_empty() {
        config.filter.keywords = args.keywords.clone();
    }
    let filter = KeywordFilter::new(&config.filter)?;
    let mode = FilterMode::from(args.mode);
    let output_dir = args.output_dir();

    let corpus = Corpus::open(&args.corpus)?;
    let exclude = match &args.exclude {
        Some(path) => match Corpus::open(path) {
            Ok(done) => Some(done),
            Err(e) => {
                log::warn!("Ignoring exclude directory {}: {}", path.display(), e);
                None
            }
        },
        None => None,
    };

    let mut documents = 0;
    let mut written = 0;
    let mut excluded = 0;
    for source in corpus.load() {
        let document = &source.document;
        if exclude
            .as_ref()
            .is_some_and(|done| done.contains(&document.channel, &document.file_name))
        {
            log::debug!("Skipping {}/{}: already filtered", document.channel, document.file_name);
            excluded += 1;
            continue;
        }
        documents += 1;

        match mode {
            FilterMode::Blocks => {
                if let Some(text) = filter.filter_blocks(&source.text) {
                    report::write_text(report::flat_path(&output_dir, document), &text)?;
                    written += 1;
                }
            }
            FilterMode::Paragraphs => {
                let text = filter.filter_paragraphs(&source.text);
                report::write_text(report::mirror_path(&output_dir, document), &text)?;
                written += 1;
            }
        }
    }

    output_result(
        &format!(
            "Filtered {} documents, wrote {} files to {}",
            documents,
            written,
            output_dir.display()
        ),
        &FilterSummary {
            mode: format!("{mode:?}").to_lowercase(),
            documents,
            written,
            excluded,
            output_dir: output_dir.display().to_string(),
        },
        cli_args,
    )
}

/// Count words per channel and write the frequency reports.
fn run_frequencies(args: &FrequenciesArgs, mut config: Config, cli_args: &DerlemArgs) -> Result<()> {
    if let Some(top) = args.top {
        config.frequency.top = top;
    }
    let top = config.frequency.top;
    let analyzer = FrequencyAnalyzer::new(config.frequency)?;
    let sources = load_corpus(&args.corpus)?;

    let frequencies = analyzer.analyze_corpus(&sources)?;
    let files = report::write_frequency_report(&args.output_dir, &frequencies, config.output.bom)?;

    let channels = frequencies
        .channels
        .iter()
        .map(|stats| ChannelSummary {
            channel: stats.channel.clone(),
            files: stats.files,
            unique_words: stats.counts.unique(),
            total_words: stats.counts.total(),
            top: stats
                .counts
                .most_common()
                .into_iter()
                .take(top)
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        })
        .collect();

    output_frequencies(
        &format!(
            "Counted {} words ({} distinct) in {} channels, wrote {} files to {}",
            frequencies.all.total(),
            frequencies.all.unique(),
            frequencies.channels.len(),
            files.len(),
            args.output_dir.display()
        ),
        &FrequencySummary {
            channels,
            unique_words: frequencies.all.unique(),
            total_words: frequencies.all.total(),
            keywords: frequencies.keywords.clone(),
            files_written: files.len(),
            output_dir: args.output_dir.display().to_string(),
        },
        cli_args,
    )
}

/// Show what each stage makes of individual tokens.
fn run_analyze(args: &AnalyzeArgs, config: Config, cli_args: &DerlemArgs) -> Result<()> {
    let analyzer = LexiconAnalyzer::load_from_file(&args.lexicon)?;
    let cleaner = TokenCleaner::with_config(&config.cleaner);
    let selector = ParseSelector::new(&analyzer);
    let repairer = RootSplitRepairer::new(&analyzer);

    let analyses: Vec<TokenAnalysis> = args
        .tokens
        .iter()
        .map(|token| {
            let cleaned = cleaner.clean_keep_apostrophe(token);
            let candidates = analyzer.analyze(&cleaned);
            let selected = selector
                .choose(&candidates)
                .map(|a| a.parse().to_string())
                .unwrap_or_else(|| NO_PARSE.to_string());
            let outcome = repairer.repair_outcome(&cleaned);
            TokenAnalysis {
                token: token.clone(),
                analyses: candidates.iter().map(|a| a.parse().to_string()).collect(),
                selected,
                repair: outcome.kind().to_string(),
                repaired: outcome.into_string(),
                acronym: is_acronym(token),
                cleaned,
            }
        })
        .collect();

    output_analyses(&analyses, cli_args)
}
