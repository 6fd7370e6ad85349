//! Token types for text analysis.
//!
//! A [`Token`] is one word flowing through the analysis pipeline. Filters
//! rewrite its text, and the first rewrite records the raw form in
//! `original`, so a token carries both its raw and cleaned shape together with
//! its position.
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::token::Token;
//!
//! let token = Token::with_offsets("Zamlar,", 1, 6, 13);
//! let cleaned = token.with_text("Zamlar");
//!
//! assert_eq!(cleaned.text, "Zamlar");
//! assert_eq!(cleaned.raw(), "Zamlar,");
//! assert_eq!(cleaned.start_offset, 6);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current text of the token.
    pub text: String,

    /// Index of the token within its input.
    pub position: usize,

    /// Byte offset of the token start in the input.
    pub start_offset: usize,

    /// Byte offset just past the token end in the input.
    pub end_offset: usize,

    /// Stopped tokens are kept in the stream but skipped by later filters.
    pub stopped: bool,

    /// Raw text before the first rewrite, if the text was rewritten.
    pub original: Option<String>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token::with_offsets(text, position, 0, 0)
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            original: None,
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The raw text as it was before any filter rewrote it.
    pub fn raw(&self) -> &str {
        self.original.as_deref().unwrap_or(&self.text)
    }

    /// Copy the token with new text, remembering the raw form.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        let text = text.into();
        if token.original.is_none() && text != token.text {
            token.original = Some(std::mem::take(&mut token.text));
        }
        token.text = text;
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
