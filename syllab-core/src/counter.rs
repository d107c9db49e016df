//! The per-word pipeline and the text-level aggregator

use tracing::trace;

use crate::locale::loader::resolve_compiled_locale;
use crate::rules::compiler::CompiledLocale;
use crate::tokenizer;

impl CompiledLocale {
    /// Count the syllables in a single word
    ///
    /// Runs the exclusion pass, counts vowel clusters in whatever is
    /// left of the word, then applies the add/subtract corrections to
    /// the same reduced word. The total is not clamped: a subtract-heavy
    /// word may come out negative, and callers that need a non-negative
    /// number clamp at the aggregate level.
    pub fn count_in_word(&self, word: &str) -> i64 {
        let outcome = self.strip_exclusions(word);
        let clusters = self.vowels().cluster_count(&outcome.word);
        let delta = self.adjustments().delta(&outcome.word);
        let total = outcome.syllables as i64 + clusters as i64 + delta;

        trace!(
            word,
            reduced = %outcome.word,
            exclusions = outcome.syllables,
            clusters,
            delta,
            total,
            "counted word"
        );

        total
    }

    /// Count the syllables in a body of text
    ///
    /// Sentence punctuation is replaced with spaces, the text is split
    /// into words, and the per-word totals are summed. Empty text
    /// yields zero.
    pub fn count_in_text(&self, text: &str) -> i64 {
        let normalized = tokenizer::normalize_punctuation(text);
        tokenizer::words(&normalized)
            .map(|word| self.count_in_word(word))
            .sum()
    }
}

/// Count the syllables in a text for a locale
///
/// Unknown locales fall back to the default rule set; see
/// [`crate::locale::get_compiled_locale`] for the strict variant.
pub fn count_syllables(text: &str, locale: &str) -> i64 {
    resolve_compiled_locale(locale).count_in_text(text)
}
