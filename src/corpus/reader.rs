//! Decoding of transcript files.
//!
//! Transcripts arrive as UTF-8 (sometimes with a BOM) or in the Windows
//! Turkish code page. Decoding tries, in order: strict UTF-8, strict
//! Windows-1254, and finally lossy UTF-8, which cannot fail.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1254;

use crate::error::Result;

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Bytes the Windows-1254 code page leaves unassigned. encoding_rs maps them
/// to C1 controls, so a document holding any of them is not Windows-1254.
const WINDOWS_1254_UNASSIGNED: [u8; 7] = [0x81, 0x8D, 0x8E, 0x8F, 0x90, 0x9D, 0x9E];

/// The encoding a document was decoded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Windows1254,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Windows1254 => "windows-1254",
            SourceEncoding::Utf8Lossy => "utf-8 (lossy)",
        };
        write!(f, "{name}")
    }
}

/// Decode raw bytes with the fallback chain.
pub fn decode(bytes: &[u8]) -> (String, SourceEncoding) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), SourceEncoding::Utf8);
    }

    if !bytes.iter().any(|b| WINDOWS_1254_UNASSIGNED.contains(b))
        && let Some(text) = WINDOWS_1254.decode_without_bom_handling_and_without_replacement(bytes)
    {
        return (text.into_owned(), SourceEncoding::Windows1254);
    }

    let text: Cow<'_, str> = String::from_utf8_lossy(bytes);
    (text.into_owned(), SourceEncoding::Utf8Lossy)
}

/// Read and decode a text file.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let (text, encoding) = decode(&bytes);
    if encoding != SourceEncoding::Utf8 {
        log::debug!("Decoded {} as {}", path.display(), encoding);
    }
    Ok(text)
}
