//! Locale-driven syllable counting for readability scoring
//!
//! This crate estimates the number of syllables in a word or body of
//! text. Counting is a per-word pipeline driven by a locale's rule
//! table:
//!
//! 1. **Exclusions**: fourteen ordered categories of known words and
//!    word parts with pre-counted syllables; each match contributes its
//!    known count and is stripped from the word before the next category
//!    runs.
//! 2. **Vowel clusters**: whatever remains of the word is scored by
//!    counting maximal runs of vowel characters.
//! 3. **Adjustments**: locale-specific add/subtract pattern lists
//!    correct the cluster estimate for known spelling patterns, one
//!    syllable per match.
//!
//! Rule tables are TOML documents; `en` and `nl` ship embedded, and
//! matchers are compiled once per locale and cached process-wide.
//!
//! # Example
//!
//! ```rust
//! use syllab_core::count_syllables;
//!
//! assert_eq!(count_syllables("cat", "en"), 1);
//! assert_eq!(count_syllables("", "en"), 0);
//! ```

pub mod counter;
pub mod error;
pub mod locale;
pub mod rules;
pub mod tokenizer;

pub use counter::count_syllables;
pub use error::{Result, RuleError};
pub use locale::{
    get_compiled_locale, get_locale_config, list_available_locales, resolve_compiled_locale,
    LocaleConfig, DEFAULT_LOCALE,
};
pub use rules::{CompiledLocale, ExclusionOutcome};
