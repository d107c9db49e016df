//! Data transfer objects for counting results

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-word counting detail
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordCount {
    /// The word as tokenized from the text
    pub word: String,
    /// Estimated syllables; not clamped, so a subtract-heavy word may
    /// come out negative
    pub syllables: i64,
}
