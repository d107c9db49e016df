//! Basic usage example for syllab-api

use syllab_api::{Config, SyllableCounter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default configuration: English, non-strict locale resolution
    let counter = SyllableCounter::new()?;

    let text = "Readability scores need a syllable estimate.";
    println!("{text:?} -> {} syllables", counter.count(text));

    for word_count in counter.count_words(text) {
        println!("  {:<12} {}", word_count.word, word_count.syllables);
    }

    // Dutch rule table, strict: unknown locales would be errors
    let config = Config::builder().locale("nl")?.strict(true).build()?;
    let dutch = SyllableCounter::with_config(config)?;
    println!("\"ideeën\" -> {} syllables (nl)", dutch.count_word("ideeën"));

    Ok(())
}
