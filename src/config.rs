//! Run configuration.
//!
//! Every section has defaults, so a JSON file only needs the fields it
//! changes:
//!
//! ```json
//! {
//!   "proper_nouns": { "policy": "all-tokens" },
//!   "filter": { "keywords": ["enflasyon", "zam", "fiyat"] },
//!   "parallel": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corpus::filter::FilterConfig;
use crate::corpus::frequency::FrequencyConfig;
use crate::error::{DerlemError, Result};
use crate::report::OutputConfig;
use crate::spelling::cleaner::CleanerConfig;
use crate::spelling::detector::DetectionConfig;
use crate::spelling::proper_noun::ProperNounConfig;

/// Configuration for all commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cleaner: CleanerConfig,
    pub proper_nouns: ProperNounConfig,
    pub detection: DetectionConfig,
    pub filter: FilterConfig,
    pub frequency: FrequencyConfig,
    pub output: OutputConfig,
    /// Scan documents on the rayon thread pool.
    pub parallel: bool,
}

impl Config {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.proper_nouns.min_length == 0 {
            return Err(DerlemError::config("proper_nouns.min_length must be at least 1"));
        }
        if self
            .proper_nouns
            .suffixes
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(DerlemError::config("proper_nouns.suffixes must not contain empty entries"));
        }
        if self.filter.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(DerlemError::config("filter.keywords must name at least one keyword"));
        }
        if self.frequency.min_word_length == 0 {
            return Err(DerlemError::config("frequency.min_word_length must be at least 1"));
        }
        Ok(())
    }
}
