//! Records produced by error detection and apostrophe repair.

use serde::{Deserialize, Serialize};

/// A token the analyzer rejected and no excuse rule covered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub channel: String,
    pub file: String,
    pub token: String,
    pub context: String,
}

/// A rejected token that the repairer changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRecord {
    pub channel: String,
    pub file: String,
    pub token: String,
    pub normalized: String,
    pub context: String,
}

/// Join the raw words within `window` positions of `index`.
///
/// The window is clipped to the line, so a token near either edge gets a
/// shorter context.
///
/// ```
/// use derlem::spelling::record::context_window;
///
/// let words = ["a", "b", "c", "d", "e"];
/// assert_eq!(context_window(&words, 0, 2), "a b c");
/// assert_eq!(context_window(&words, 4, 1), "d e");
/// ```
pub fn context_window<S: AsRef<str>>(words: &[S], index: usize, window: usize) -> String {
    let start = index.saturating_sub(window);
    let end = words.len().min(index.saturating_add(window).saturating_add(1));
    if start >= end {
        return String::new();
    }

    words[start..end]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
