//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DerlemArgs, OutputFormat};
use crate::error::Result;

/// Result of `detect` and `normalize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub documents: usize,
    pub proper_nouns: usize,
    pub records: usize,
    pub output: String,
}

/// Result of `split`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitSummary {
    pub documents: usize,
    pub sentences: usize,
    pub output_dir: String,
}

/// Result of `disambiguate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DisambiguationSummary {
    pub documents: usize,
    pub sentences: usize,
    pub tokens: usize,
    /// Tokens written with the no-parse marker.
    pub unparsed: usize,
    pub output_dir: String,
}

/// Result of `filter`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterSummary {
    pub mode: String,
    pub documents: usize,
    pub written: usize,
    pub excluded: usize,
    pub output_dir: String,
}

/// Top words of one channel.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub channel: String,
    pub files: usize,
    pub unique_words: usize,
    pub total_words: usize,
    pub top: Vec<(String, usize)>,
}

/// Result of `frequencies`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FrequencySummary {
    pub channels: Vec<ChannelSummary>,
    pub unique_words: usize,
    pub total_words: usize,
    pub keywords: Vec<(String, usize)>,
    pub files_written: usize,
    pub output_dir: String,
}

/// Result of `analyze` for one token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenAnalysis {
    pub token: String,
    pub cleaned: String,
    pub analyses: Vec<String>,
    pub selected: String,
    pub repaired: String,
    pub repair: String,
    pub acronym: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &DerlemArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output frequency results, listing top words per channel.
pub fn output_frequencies(
    message: &str,
    summary: &FrequencySummary,
    args: &DerlemArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(summary, args);
    }
    if args.verbosity() > 1 {
        for channel in &summary.channels {
            println!(
                "{} ({} files, {} words, {} distinct)",
                channel.channel, channel.files, channel.total_words, channel.unique_words
            );
            for (word, count) in &channel.top {
                println!("  {word:20} {count:6}");
            }
            println!();
        }
    }
    if args.verbosity() > 0 {
        println!("{message}");
    }
    Ok(())
}

/// Output token analyses. These are the command's product, so they are
/// printed even in quiet mode.
pub fn output_analyses(analyses: &[TokenAnalysis], args: &DerlemArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(&analyses, args);
    }
    for analysis in analyses {
        println!("{}", analysis.token);
        println!("  cleaned:  {}", analysis.cleaned);
        if analysis.analyses.is_empty() {
            println!("  analyses: none");
        } else {
            println!("  analyses:");
            for parse in &analysis.analyses {
                println!("    {parse}");
            }
        }
        println!("  selected: {}", analysis.selected);
        println!("  repaired: {} ({})", analysis.repaired, analysis.repair);
        println!("  acronym:  {}", analysis.acronym);
    }
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &DerlemArgs) -> Result<()> {
    if args.verbosity() > 1 {
        let value = serde_json::to_value(result)?;
        if let serde_json::Value::Object(obj) = &value {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
    }
    if args.verbosity() > 0 {
        println!("{message}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DerlemArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
