//! Criterion benchmarks for the normalization pipeline.
//!
//! - token cleaning
//! - apostrophe repair
//! - document scanning, sequential and parallel
//! - word-frequency analysis

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use derlem::corpus::document::{Document, SourceText};
use derlem::corpus::frequency::{FrequencyAnalyzer, FrequencyConfig};
use derlem::morphology::lexicon::LexiconAnalyzer;
use derlem::spelling::cleaner::TokenCleaner;
use derlem::spelling::detector::{DetectionConfig, detect};
use derlem::spelling::proper_noun::ProperNounConfig;
use derlem::spelling::repair::RootSplitRepairer;

const WORDS: &[&str] = &[
    "Merkez",
    "Bankası",
    "faizi",
    "yükseltti",
    "enflasyon",
    "zamlandı",
    "TCMBnin",
    "Ankarada",
    "fiyatlar",
    "arttı,",
    "döviz",
    "kuru",
    "%64",
    "TÜFE",
    "açıkladı.",
    "ekmeğe",
    "zam",
    "geldi",
];

fn lexicon() -> LexiconAnalyzer {
    LexiconAnalyzer::from_entries([
        ("Merkez", "merkez+NOUN+PROP+A3SG+PNON+NOM"),
        ("Bankası", "banka+NOUN+A3SG+P3SG+NOM"),
        ("faizi", "faiz+NOUN+A3SG+P3SG+NOM"),
        ("yükseltti", "yüksel+VERB^DB+VERB+CAUS+POS+PAST+A3SG"),
        ("enflasyon", "enflasyon+NOUN+A3SG+PNON+NOM"),
        ("zam", "zam+NOUN+A3SG+PNON+NOM"),
        ("TCMB", "tcmb+NOUN+ABBR+A3SG+PNON+NOM"),
        ("fiyatlar", "fiyat+NOUN+A3PL+PNON+NOM"),
        ("arttı", "art+VERB+POS+PAST+A3SG"),
        ("döviz", "döviz+NOUN+A3SG+PNON+NOM"),
        ("kuru", "kur+NOUN+A3SG+P3SG+NOM"),
        ("TÜFE", "tüfe+NOUN+ABBR+A3SG+PNON+NOM"),
        ("açıkladı", "açıkla+VERB+POS+PAST+A3SG"),
        ("geldi", "gel+VERB+POS+PAST+A3SG"),
    ])
}

/// Generate transcripts with a pseudo-random word distribution.
fn generate_sources(count: usize) -> Vec<SourceText> {
    (0..count)
        .map(|i| {
            let lines: Vec<String> = (0..20)
                .map(|l| {
                    (0..12)
                        .map(|j| WORDS[(i * 7 + l * 5 + j * 13) % WORDS.len()])
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            let file_name = format!("{i}.txt");
            SourceText {
                document: Document::new(
                    format!("Kanal{}", i % 4),
                    file_name.clone(),
                    PathBuf::from(file_name),
                ),
                text: lines.join("\n"),
            }
        })
        .collect()
}

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens");
    let lexicon = lexicon();
    let cleaner = TokenCleaner::new();
    let repairer = RootSplitRepairer::new(&lexicon);

    group.throughput(Throughput::Elements(WORDS.len() as u64));
    group.bench_function("clean", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(cleaner.clean_keep_apostrophe(black_box(word)));
            }
        })
    });

    group.bench_function("repair", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(repairer.repair(black_box(word)));
            }
        })
    });

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");
    group.sample_size(20);

    let lexicon = lexicon();
    let sources = generate_sources(200);
    let cleaner = TokenCleaner::new();
    let proper_nouns = ProperNounConfig::default();
    let config = DetectionConfig::default();

    group.throughput(Throughput::Elements(sources.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| {
            black_box(detect(
                &lexicon,
                black_box(&sources),
                &proper_nouns,
                &cleaner,
                &config,
                false,
            ))
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            black_box(detect(
                &lexicon,
                black_box(&sources),
                &proper_nouns,
                &cleaner,
                &config,
                true,
            ))
        })
    });

    group.finish();
}

fn bench_frequencies(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequencies");
    let sources = generate_sources(100);
    let analyzer = FrequencyAnalyzer::new(FrequencyConfig::default()).unwrap();

    group.throughput(Throughput::Elements(sources.len() as u64));
    group.bench_function("analyze_corpus", |b| {
        b.iter(|| black_box(analyzer.analyze_corpus(black_box(&sources)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_tokens, bench_detection, bench_frequencies);
criterion_main!(benches);
