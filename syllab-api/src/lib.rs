//! Public API for locale-driven syllable counting
//!
//! This crate provides a clean, stable interface over the rules engine
//! in `syllab-core`. Counting is a heuristic estimate meant as input to
//! readability scoring, not a phonetic analysis.
//!
//! # Example
//!
//! ```rust
//! use syllab_api::SyllableCounter;
//!
//! let counter = SyllableCounter::with_locale("en").unwrap();
//! assert_eq!(counter.count("cat"), 1);
//! assert_eq!(counter.count(""), 0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::path::Path;
use std::sync::Arc;

use syllab_core::{tokenizer, CompiledLocale};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::WordCount;
pub use error::{ApiError, Result};

/// Main entry point for syllable counting
///
/// A counter resolves its locale's compiled rule table once at
/// construction; counting itself is pure and infallible. Counters are
/// cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct SyllableCounter {
    rules: Arc<CompiledLocale>,
    config: Config,
}

impl SyllableCounter {
    /// Create a counter with the default configuration (English,
    /// non-strict locale resolution)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a counter for a specific locale
    pub fn with_locale(locale: &str) -> Result<Self> {
        let config = Config::builder().locale(locale)?.build()?;
        Self::with_config(config)
    }

    /// Create a counter with custom configuration
    ///
    /// In strict mode an unknown locale is an error; otherwise it falls
    /// back to the default rule set.
    pub fn with_config(config: Config) -> Result<Self> {
        let rules = if config.strict {
            syllab_core::get_compiled_locale(&config.locale)?
        } else {
            syllab_core::resolve_compiled_locale(&config.locale)
        };

        Ok(Self { rules, config })
    }

    /// Create a counter from an external TOML rule table
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self> {
        let rules = CompiledLocale::from_file(path.as_ref())?;
        let config = Config::builder().locale(rules.code())?.build()?;
        Ok(Self {
            rules: Arc::new(rules),
            config,
        })
    }

    /// Count the syllables in a body of text
    ///
    /// Empty text yields zero. The total is the word-by-word sum and is
    /// not clamped at zero.
    pub fn count(&self, text: &str) -> i64 {
        self.rules.count_in_text(text)
    }

    /// Count the syllables in a single word
    pub fn count_word(&self, word: &str) -> i64 {
        self.rules.count_in_word(word)
    }

    /// Count per word, preserving tokenization order
    pub fn count_words(&self, text: &str) -> Vec<WordCount> {
        let normalized = tokenizer::normalize_punctuation(text);
        tokenizer::words(&normalized)
            .map(|word| WordCount {
                word: word.to_string(),
                syllables: self.rules.count_in_word(word),
            })
            .collect()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The locale code of the rule table in use
    ///
    /// May differ from the configured locale when a non-strict counter
    /// fell back to the default rule set.
    pub fn locale(&self) -> &str {
        self.rules.code()
    }
}

// Convenience functions

/// Count syllables in a text for a locale
///
/// Unknown locales fall back to the default rule set.
pub fn count_syllables(text: &str, locale: &str) -> Result<i64> {
    let counter = SyllableCounter::with_locale(locale)?;
    Ok(counter.count(text))
}

/// Count syllables in a text with the default configuration
pub fn count_text(text: &str) -> Result<i64> {
    let counter = SyllableCounter::new()?;
    Ok(counter.count(text))
}

/// List the locales with embedded rule tables
pub fn available_locales() -> Vec<&'static str> {
    syllab_core::list_available_locales()
}
