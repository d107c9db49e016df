//! Fallback syllable estimation by vowel-cluster counting

use std::collections::HashSet;

/// The set of characters the cluster counter treats as vowels
///
/// A maximal run of consecutive vowel characters counts as one syllable
/// unit. This is the language-agnostic estimator applied to whatever is
/// left of a word once the known exceptions have been stripped.
#[derive(Debug, Clone)]
pub struct VowelSet {
    chars: HashSet<char>,
}

impl VowelSet {
    /// Build a vowel set from the configured character class
    ///
    /// Comparison is case-insensitive; the configured class is stored
    /// lowercased.
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().flat_map(|ch| ch.to_lowercase()).collect(),
        }
    }

    /// Whether a character belongs to the vowel class
    pub fn contains(&self, ch: char) -> bool {
        ch.to_lowercase().all(|c| self.chars.contains(&c))
    }

    /// Count maximal runs of vowel characters in a word
    ///
    /// An empty word yields zero.
    pub fn cluster_count(&self, word: &str) -> u64 {
        let mut clusters = 0;
        let mut in_cluster = false;
        for ch in word.chars() {
            let is_vowel = self.contains(ch);
            if is_vowel && !in_cluster {
                clusters += 1;
            }
            in_cluster = is_vowel;
        }
        clusters
    }
}
