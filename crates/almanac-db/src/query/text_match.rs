//! Case-insensitive substring matching for free-text template search.

use icu::casemap::CaseMapper;

/// A search needle, case-folded once and matched against many haystacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedNeedle {
    folded: String,
}

impl FoldedNeedle {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            folded: fold(text),
        }
    }

    /// ## Summary
    /// Returns whether `haystack` contains the needle, ignoring case.
    ///
    /// Both sides use Unicode case folding, so `STRASSE` matches `straße`.
    #[must_use]
    pub fn is_contained_in(&self, haystack: &str) -> bool {
        fold(haystack).contains(&self.folded)
    }
}

fn fold(text: &str) -> String {
    CaseMapper::new().fold_string(text).into_owned()
}
