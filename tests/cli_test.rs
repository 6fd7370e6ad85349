//! End-to-end tests of the derlem commands on a small corpus.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use derlem::cli::{DerlemArgs, execute_command};
use derlem::error::{DerlemError, Result};

const LEXICON: &str = "\
# surface\tparse
Ankara\tankara+NOUN+PROP+A3SG+PNON+NOM
bugün\tbugün+ADV
zam\tzam+NOUN+A3SG+PNON+NOM
geldi\tgel+VERB+POS+PAST+A3SG
fiyatlar\tfiyat+NOUN+A3PL+PNON+NOM
enflasyon\tenflasyon+NOUN+A3SG+PNON+NOM
arttı\tart+VERB+POS+PAST+A3SG
ve\tve+CONJ
";

const BOM: &str = "\u{feff}";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    /// A corpus of two channels. `KanalB/1.txt` is stored in Windows-1254.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("Ekonomi");
        fs::create_dir_all(corpus.join("KanalA")).unwrap();
        fs::create_dir_all(corpus.join("KanalB")).unwrap();

        fs::write(
            corpus.join("KanalA").join("1.txt"),
            "Ankara bugün zam geldi\nAnkarada fiyatlar zamlandı",
        )
        .unwrap();
        fs::write(
            corpus.join("KanalA").join("2.txt"),
            "enflasyon arttı ve TCMB açıkladı",
        )
        .unwrap();
        fs::write(
            corpus.join("KanalB").join("1.txt"),
            b"fiyatlar artt\xFD\n\nbug\xFCn zam geldi".as_slice(),
        )
        .unwrap();
        fs::write(dir.path().join("lexicon.tsv"), LEXICON).unwrap();

        Fixture { dir }
    }

    fn corpus(&self) -> PathBuf {
        self.dir.path().join("Ekonomi")
    }

    fn lexicon(&self) -> PathBuf {
        self.dir.path().join("lexicon.tsv")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn run(args: &[&str]) -> Result<()> {
    let argv = ["derlem", "-q"].into_iter().chain(args.iter().copied());
    execute_command(DerlemArgs::try_parse_from(argv).unwrap())
}

#[test]
fn test_detect_writes_error_report() {
    let fixture = Fixture::new();
    let output = fixture.path("errors.csv");

    run(&[
        "detect",
        arg(&fixture.corpus()),
        "-l",
        arg(&fixture.lexicon()),
        "-o",
        arg(&output),
    ])
    .unwrap();

    // "Ankarada" is a known name with a suffix and "TCMB" is an acronym.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!(
            "{BOM}channel,file,token,context\n\
             KanalA,1.txt,zamlandı,Ankarada fiyatlar zamlandı\n\
             KanalA,2.txt,açıkladı,enflasyon arttı ve TCMB açıkladı\n"
        )
    );
}

#[test]
fn test_normalize_writes_repairs() {
    let fixture = Fixture::new();
    let output = fixture.path("normalized.csv");

    run(&[
        "normalize",
        arg(&fixture.corpus()),
        "-l",
        arg(&fixture.lexicon()),
        "-o",
        arg(&output),
    ])
    .unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!(
            "{BOM}channel,file,token,normalized,context\n\
             KanalA,1.txt,Ankarada,Ankara'da,Ankarada fiyatlar zamlandı\n\
             KanalA,1.txt,zamlandı,zam'landı,Ankarada fiyatlar zamlandı\n"
        )
    );
}

#[test]
fn test_parallel_detection_writes_the_same_report() {
    let fixture = Fixture::new();
    let sequential = fixture.path("sequential.csv");
    let parallel = fixture.path("parallel.csv");
    let corpus = fixture.corpus();
    let lexicon = fixture.lexicon();

    for (output, extra) in [(&sequential, None), (&parallel, Some("--parallel"))] {
        let mut args = vec![
            "detect",
            arg(&corpus),
            "-l",
            arg(&lexicon),
            "-o",
            arg(output),
        ];
        args.extend(extra);
        run(&args).unwrap();
    }

    assert_eq!(
        fs::read_to_string(&sequential).unwrap(),
        fs::read_to_string(&parallel).unwrap()
    );
}

#[test]
fn test_config_file_disables_bom() {
    let fixture = Fixture::new();
    let config = fixture.path("derlem.json");
    fs::write(&config, r#"{"output": {"bom": false}}"#).unwrap();
    let output = fixture.path("errors.csv");

    run(&[
        "-c",
        arg(&config),
        "detect",
        arg(&fixture.corpus()),
        "-l",
        arg(&fixture.lexicon()),
        "-o",
        arg(&output),
    ])
    .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("channel,file,token,context\n"));
}

#[test]
fn test_split_mirrors_the_corpus() {
    let fixture = Fixture::new();

    run(&["split", arg(&fixture.corpus()), "-l", arg(&fixture.lexicon())]).unwrap();

    let out = fixture.path("Ekonomi-Split");
    assert_eq!(
        fs::read_to_string(out.join("KanalA").join("1.txt")).unwrap(),
        "Ankara bugün zam geldi\nAnkarada fiyatlar zamlandı\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("KanalA").join("2.txt")).unwrap(),
        "enflasyon arttı\nve TCMB açıkladı\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("KanalB").join("1.txt")).unwrap(),
        "fiyatlar arttı\nbugün zam geldi\n"
    );
}

#[test]
fn test_disambiguate_writes_selected_parses() {
    let fixture = Fixture::new();
    let out = fixture.path("parsed");

    run(&[
        "disambiguate",
        arg(&fixture.corpus()),
        "-l",
        arg(&fixture.lexicon()),
        "-d",
        arg(&out),
    ])
    .unwrap();

    assert_eq!(
        fs::read_to_string(out.join("KanalB").join("1.txt")).unwrap(),
        "<S>\n\
         fiyatlar\tfiyat+NOUN+A3PL+PNON+NOM\n\
         arttı\tart+VERB+POS+PAST+A3SG\n\
         </S>\n\
         \n\
         <S>\n\
         bugün\tbugün+ADV\n\
         zam\tzam+NOUN+A3SG+PNON+NOM\n\
         geldi\tgel+VERB+POS+PAST+A3SG\n\
         </S>\n\
         \n"
    );
    let second = fs::read_to_string(out.join("KanalA").join("2.txt")).unwrap();
    assert!(second.contains("TCMB\t_\n"));
}

#[test]
fn test_frequencies_writes_every_report() {
    let fixture = Fixture::new();
    let out = fixture.path("output");

    run(&["frequencies", arg(&fixture.corpus()), "-d", arg(&out)]).unwrap();

    assert_eq!(
        fs::read_to_string(out.join("KanalB_frequencies.csv")).unwrap(),
        format!("{BOM}word,count\nfiyatlar,1\narttı,1\nzam,1\n")
    );
    assert_eq!(
        fs::read_to_string(out.join("KanalB_vocabulary.txt")).unwrap(),
        "arttı\nfiyatlar\nzam\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("ALL_CHANNELS_frequencies.csv")).unwrap(),
        format!(
            "{BOM}word,count\nzam,2\nfiyatlar,2\narttı,2\nankara,1\nankarada,1\n\
             zamlandı,1\nenflasyon,1\ntcmb,1\n"
        )
    );
    assert_eq!(
        fs::read_to_string(out.join("SUMMARY_REPORT.csv")).unwrap(),
        format!("{BOM}channel,files,unique_words,total_words\nKanalA,2,8,8\nKanalB,1,3,3\n")
    );
    assert_eq!(
        fs::read_to_string(out.join("INFLATION_KEYWORDS.csv")).unwrap(),
        format!("{BOM}word,count\nenflasyon,1\n")
    );
}

#[test]
fn test_filter_skips_excluded_documents() {
    let fixture = Fixture::new();
    let done = fixture.path("Yapilan");
    fs::create_dir_all(done.join("KanalA")).unwrap();
    fs::write(done.join("KanalA").join("1.txt"), "zam").unwrap();
    let out = fixture.path("filtered");

    run(&[
        "filter",
        arg(&fixture.corpus()),
        "--exclude",
        arg(&done),
        "-d",
        arg(&out),
    ])
    .unwrap();

    assert!(!out.join("KanalA_1.txt").exists());
    assert!(out.join("KanalA_2.txt").exists());
    assert!(out.join("KanalB_1.txt").exists());
}

#[test]
fn test_filter_with_missing_exclude_keeps_going() {
    let fixture = Fixture::new();
    let out = fixture.path("filtered");

    run(&[
        "filter",
        arg(&fixture.corpus()),
        "--exclude",
        arg(&fixture.path("yok")),
        "-d",
        arg(&out),
    ])
    .unwrap();

    assert!(out.join("KanalA_1.txt").exists());
    assert!(out.join("KanalA_2.txt").exists());
    assert!(out.join("KanalB_1.txt").exists());
}

#[test]
fn test_analyze_accepts_tokens() {
    let fixture = Fixture::new();
    run(&["analyze", "-l", arg(&fixture.lexicon()), "Ankarada", "TCMB'nin"]).unwrap();
    run(&["-f", "json", "analyze", "-l", arg(&fixture.lexicon()), "zamlandı"]).unwrap();
}

#[test]
fn test_missing_corpus_is_an_error() {
    let fixture = Fixture::new();
    let missing = fixture.path("yok");

    let error = run(&["split", arg(&missing), "-l", arg(&fixture.lexicon())]).unwrap_err();
    assert!(matches!(error, DerlemError::Corpus(_)));
}

#[test]
fn test_missing_lexicon_is_an_error() {
    let fixture = Fixture::new();
    let missing = fixture.path("yok.tsv");

    let result = run(&["detect", arg(&fixture.corpus()), "-l", arg(&missing)]);
    assert!(result.is_err());
}
