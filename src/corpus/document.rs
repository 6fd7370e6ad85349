//! Corpus discovery.
//!
//! A corpus is a base directory with one subdirectory per news channel, each
//! holding `.txt` transcripts:
//!
//! ```text
//! Ekonomi/
//! ├── KanalA/
//! │   ├── 2023-01-04.txt
//! │   └── 2023-01-05.txt
//! └── KanalB/
//!     └── 2023-01-04.txt
//! ```
//!
//! Channels and files are sorted by name so every run visits them in the same
//! order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::reader::read_text;
use crate::error::{DerlemError, Result};

const IGNORED_FILES: &[&str] = &["desktop.ini"];

/// One transcript in the corpus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// Name of the channel subdirectory.
    pub channel: String,
    /// Base name of the file.
    pub file_name: String,
    pub path: PathBuf,
}

impl Document {
    pub fn new<C: Into<String>, F: Into<String>>(channel: C, file_name: F, path: PathBuf) -> Self {
        Document {
            channel: channel.into(),
            file_name: file_name.into(),
            path,
        }
    }
}

/// A document together with its decoded text.
#[derive(Clone, Debug)]
pub struct SourceText {
    pub document: Document,
    pub text: String,
}

/// A directory of channels.
#[derive(Clone, Debug)]
pub struct Corpus {
    root: PathBuf,
    documents: Vec<Document>,
}

impl Corpus {
    /// Discover all channels and transcripts under `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(DerlemError::corpus(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut documents = Vec::new();
        for (channel, channel_path) in sorted_entries(&root, |path| path.is_dir())? {
            let files = sorted_entries(&channel_path, |path| path.is_file() && is_transcript(path))?;
            for (file_name, path) in files {
                documents.push(Document::new(channel.clone(), file_name, path));
            }
        }

        log::info!(
            "Discovered {} documents in {}",
            documents.len(),
            root.display()
        );
        Ok(Corpus { root, documents })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Distinct channel names in corpus order.
    pub fn channels(&self) -> Vec<&str> {
        let mut channels: Vec<&str> = Vec::new();
        for document in &self.documents {
            if channels.last() != Some(&document.channel.as_str()) {
                channels.push(&document.channel);
            }
        }
        channels
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Check whether the corpus has `channel/file_name`.
    pub fn contains(&self, channel: &str, file_name: &str) -> bool {
        self.documents
            .iter()
            .any(|d| d.channel == channel && d.file_name == file_name)
    }

    /// Read every document, skipping the ones that cannot be read.
    pub fn load(&self) -> Vec<SourceText> {
        self.documents
            .iter()
            .filter_map(|document| match read_text(&document.path) {
                Ok(text) => Some(SourceText {
                    document: document.clone(),
                    text,
                }),
                Err(e) => {
                    log::warn!("Skipping {}: {}", document.path.display(), e);
                    None
                }
            })
            .collect()
    }
}

fn is_transcript(path: &Path) -> bool {
    let ignored = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| IGNORED_FILES.iter().any(|i| n.eq_ignore_ascii_case(i)));
    let txt = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    txt && !ignored
}

fn sorted_entries<F>(dir: &Path, keep: F) -> Result<Vec<(String, PathBuf)>>
where
    F: Fn(&Path) -> bool,
{
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !keep(&path) {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => entries.push((name.to_string(), path.clone())),
            None => log::warn!("Skipping non UTF-8 path {}", path.display()),
        }
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}
