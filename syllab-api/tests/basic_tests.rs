//! Basic tests for syllab-api

use syllab_api::*;

#[test]
fn test_count_simple_word() {
    let counter = SyllableCounter::with_locale("en").unwrap();
    assert_eq!(counter.count("cat"), 1);
}

#[test]
fn test_count_empty_text() {
    let counter = SyllableCounter::with_locale("en").unwrap();
    assert_eq!(counter.count(""), 0);
}

#[test]
fn test_exclusion_word_uses_known_count() {
    let counter = SyllableCounter::with_locale("en").unwrap();
    assert_eq!(counter.count("simile"), 3);
}

#[test]
fn test_text_sums_word_by_word() {
    let counter = SyllableCounter::with_locale("en").unwrap();
    let text = "Cats run, dogs fly.";

    let words = counter.count_words(text);
    let word_list: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(word_list, ["Cats", "run", "dogs", "fly"]);

    let sum: i64 = words.iter().map(|w| w.syllables).sum();
    assert_eq!(counter.count(text), sum);
}

#[test]
fn test_config_builder() {
    let config = Config::builder().locale("nl").unwrap().build().unwrap();
    let counter = SyllableCounter::with_config(config).unwrap();
    assert_eq!(counter.locale(), "nl");
}

#[test]
fn test_unknown_locale_falls_back_by_default() {
    let counter = SyllableCounter::with_locale("tlh").unwrap();
    assert_eq!(counter.locale(), "en");
    assert_eq!(counter.count("cat"), 1);
}

#[test]
fn test_unknown_locale_errors_in_strict_mode() {
    let config = Config::builder()
        .locale("tlh")
        .unwrap()
        .strict(true)
        .build()
        .unwrap();

    match SyllableCounter::with_config(config) {
        Err(ApiError::Rules(syllab_core::RuleError::UnsupportedLocale(code))) => {
            assert_eq!(code, "tlh");
        }
        other => panic!("expected UnsupportedLocale error, got {other:?}"),
    }
}

#[test]
fn test_convenience_functions() {
    assert_eq!(count_syllables("cat", "en").unwrap(), 1);
    assert_eq!(count_text("").unwrap(), 0);
    assert!(available_locales().contains(&"nl"));
}

#[test]
#[cfg(feature = "serde")]
fn test_word_count_serialization() {
    let word_count = WordCount {
        word: "cat".to_string(),
        syllables: 1,
    };

    let json = serde_json::to_string(&word_count).unwrap();
    let deserialized: WordCount = serde_json::from_str(&json).unwrap();
    assert_eq!(word_count, deserialized);
}
