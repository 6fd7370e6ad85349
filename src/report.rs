//! Writing results to disk.
//!
//! CSV files optionally start with a UTF-8 byte order mark so spreadsheet
//! tools detect the encoding of Turkish text. Per-document outputs mirror the
//! corpus layout under an output directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::document::Document;
use crate::corpus::frequency::{FrequencyReport, SummaryRow};
use crate::corpus::reader::UTF8_BOM;
use crate::error::Result;
use crate::spelling::record::{ErrorRecord, NormalizationRecord};

pub const ERROR_HEADERS: &[&str] = &["channel", "file", "token", "context"];
pub const NORMALIZATION_HEADERS: &[&str] = &["channel", "file", "token", "normalized", "context"];
pub const WORD_COUNT_HEADERS: &[&str] = &["word", "count"];
pub const SUMMARY_HEADERS: &[&str] = &["channel", "files", "unique_words", "total_words"];

pub const ALL_CHANNELS: &str = "ALL_CHANNELS";
pub const SUMMARY_FILE: &str = "SUMMARY_REPORT.csv";
pub const KEYWORDS_FILE: &str = "INFLATION_KEYWORDS.csv";

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Start CSV files with a UTF-8 byte order mark.
    pub bom: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { bom: true }
    }
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Write a CSV file with a header row, even when there are no rows.
fn write_csv<T, I>(path: &Path, headers: &[&str], rows: I, bom: bool) -> Result<usize>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut file = create_file(path)?;
    if bom {
        file.write_all(UTF8_BOM)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(headers)?;

    let mut written = 0;
    for row in rows {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush()?;

    log::debug!("Wrote {} rows to {}", written, path.display());
    Ok(written)
}

/// Write error records as `channel,file,token,context`.
pub fn write_errors<P: AsRef<Path>>(path: P, records: &[ErrorRecord], bom: bool) -> Result<usize> {
    write_csv(path.as_ref(), ERROR_HEADERS, records, bom)
}

/// Write normalization records as `channel,file,token,normalized,context`.
pub fn write_normalizations<P: AsRef<Path>>(
    path: P,
    records: &[NormalizationRecord],
    bom: bool,
) -> Result<usize> {
    write_csv(path.as_ref(), NORMALIZATION_HEADERS, records, bom)
}

/// Write `word,count` rows in the given order.
pub fn write_word_counts<P: AsRef<Path>>(
    path: P,
    counts: &[(&str, usize)],
    bom: bool,
) -> Result<usize> {
    write_csv(path.as_ref(), WORD_COUNT_HEADERS, counts, bom)
}

pub fn write_summary<P: AsRef<Path>>(path: P, rows: &[SummaryRow], bom: bool) -> Result<usize> {
    write_csv(path.as_ref(), SUMMARY_HEADERS, rows, bom)
}

/// Write one entry per line, each line newline-terminated.
pub fn write_lines<P, I, S>(path: P, lines: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut file = create_file(path.as_ref())?;
    let mut written = 0;
    for line in lines {
        file.write_all(line.as_ref().as_bytes())?;
        file.write_all(b"\n")?;
        written += 1;
    }
    file.flush()?;
    Ok(written)
}

/// Write text exactly as given.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let mut file = create_file(path.as_ref())?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// `<out>/<channel>/<file>` for a document.
pub fn mirror_path<P: AsRef<Path>>(out_dir: P, document: &Document) -> PathBuf {
    out_dir
        .as_ref()
        .join(&document.channel)
        .join(&document.file_name)
}

/// `<out>/<channel>_<file>` for a document.
pub fn flat_path<P: AsRef<Path>>(out_dir: P, document: &Document) -> PathBuf {
    out_dir
        .as_ref()
        .join(format!("{}_{}", document.channel, document.file_name))
}

/// Write every frequency output into `out_dir` and return the written paths.
pub fn write_frequency_report<P: AsRef<Path>>(
    out_dir: P,
    report: &FrequencyReport,
    bom: bool,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for stats in &report.channels {
        let frequencies = out_dir.join(format!("{}_frequencies.csv", stats.channel));
        write_word_counts(&frequencies, &stats.counts.most_common(), bom)?;
        written.push(frequencies);

        let vocabulary = out_dir.join(format!("{}_vocabulary.txt", stats.channel));
        write_lines(&vocabulary, stats.counts.vocabulary())?;
        written.push(vocabulary);
    }

    let all = out_dir.join(format!("{ALL_CHANNELS}_frequencies.csv"));
    write_word_counts(&all, &report.all.most_common(), bom)?;
    written.push(all);

    let summary = out_dir.join(SUMMARY_FILE);
    write_summary(&summary, &report.summary(), bom)?;
    written.push(summary);

    // No keyword matched, so there is nothing to tabulate.
    if !report.keywords.is_empty() {
        let keywords = out_dir.join(KEYWORDS_FILE);
        let keyword_rows: Vec<(&str, usize)> = report
            .keywords
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        write_word_counts(&keywords, &keyword_rows, bom)?;
        written.push(keywords);
    }

    log::info!("Wrote {} frequency files to {}", written.len(), out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::frequency::{ChannelStats, WordCounts};

    fn error(token: &str) -> ErrorRecord {
        ErrorRecord {
            channel: "KanalA".to_string(),
            file: "1.txt".to_string(),
            token: token.to_string(),
            context: format!("önce {token}, sonra"),
        }
    }

    #[test]
    fn test_write_errors_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.csv");

        let written = write_errors(&path, &[error("enflsyon")], true).unwrap();

        assert_eq!(written, 1);
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "channel,file,token,context\nKanalA,1.txt,enflsyon,\"önce enflsyon, sonra\"\n"
        );
    }

    #[test]
    fn test_empty_csv_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("normalized.csv");

        let written = write_normalizations(&path, &[], false).unwrap();

        assert_eq!(written, 0);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "channel,file,token,normalized,context\n"
        );
    }

    #[test]
    fn test_mirror_and_flat_paths() {
        let document = Document::new("KanalB", "2023-05-01.txt", PathBuf::from("x"));
        assert_eq!(
            mirror_path("out", &document),
            Path::new("out").join("KanalB").join("2023-05-01.txt")
        );
        assert_eq!(
            flat_path("out", &document),
            Path::new("out").join("KanalB_2023-05-01.txt")
        );
    }

    #[test]
    fn test_write_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b.txt");
        write_lines(&path, ["bir cümle", "iki cümle"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "bir cümle\niki cümle\n");
    }

    #[test]
    fn test_write_frequency_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut counts = WordCounts::new();
        for word in ["zam", "enflasyon", "zam"] {
            counts.add(word);
        }
        let mut all = WordCounts::new();
        all.merge(&counts);
        let report = FrequencyReport {
            channels: vec![ChannelStats {
                channel: "KanalA".to_string(),
                files: 1,
                counts,
            }],
            all,
            keywords: vec![("enflasyon".to_string(), 1)],
        };

        let written = write_frequency_report(dir.path(), &report, false).unwrap();

        assert_eq!(written.len(), 5);
        assert_eq!(
            fs::read_to_string(dir.path().join("KanalA_frequencies.csv")).unwrap(),
            "word,count\nzam,2\nenflasyon,1\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("KanalA_vocabulary.txt")).unwrap(),
            "enflasyon\nzam\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap(),
            "channel,files,unique_words,total_words\nKanalA,1,2,3\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(KEYWORDS_FILE)).unwrap(),
            "word,count\nenflasyon,1\n"
        );
    }

    #[test]
    fn test_keywords_file_skipped_without_matches() {
        let dir = tempfile::tempdir().unwrap();
        let mut counts = WordCounts::new();
        counts.add("faiz");
        let mut all = WordCounts::new();
        all.merge(&counts);
        let report = FrequencyReport {
            channels: vec![ChannelStats {
                channel: "KanalA".to_string(),
                files: 1,
                counts,
            }],
            all,
            keywords: Vec::new(),
        };

        let written = write_frequency_report(dir.path(), &report, false).unwrap();

        assert_eq!(written.len(), 4);
        assert!(!dir.path().join(KEYWORDS_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }
}
