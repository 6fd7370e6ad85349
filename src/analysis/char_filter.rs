//! Char filters pre-process text before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use derlem::analysis::char_filter::CharFilter;
//! use derlem::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::non_turkish_letters().unwrap();
//! let (text, _) = filter.filter("Yüzde 64,7'ye çıktı!");
//! assert_eq!(text, "Yüzde ye çıktı");
//! ```

/// A change in the text, mapping a range of the input to a range of the
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    /// Bytes removed (positive) or added (negative) by this change.
    pub fn shrink(&self) -> isize {
        (self.original_end - self.original_start) as isize
            - (self.new_end - self.new_start) as isize
    }
}

/// Trait for character filters that transform text before tokenization.
///
/// Returns the filtered text along with the transformations that changed its
/// length.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
