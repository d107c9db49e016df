//! The exclusion pass: known words and word parts with pre-counted
//! syllables

use tracing::trace;

use crate::rules::compiler::CompiledLocale;

/// Result of running the exclusion pass over one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionOutcome {
    /// What is left of the word after every matched substring was
    /// stripped
    pub word: String,
    /// Known syllables collected from the matched rules
    pub syllables: u64,
}

impl CompiledLocale {
    /// Apply the exclusion categories to a word in their fixed order
    ///
    /// Each category runs against the word as reduced by the categories
    /// before it. A category that matches contributes the sum of
    /// `match_count x syllables` over its rules and strips every matched
    /// occurrence; a category that matches nothing leaves the word
    /// unchanged. The pass only removes characters, so it terminates
    /// after one sweep and is a no-op on its own output.
    pub fn strip_exclusions(&self, word: &str) -> ExclusionOutcome {
        let mut outcome = ExclusionOutcome {
            word: word.to_string(),
            syllables: 0,
        };

        for category in self.categories() {
            let found = category.count(&outcome.word);
            if found == 0 {
                continue;
            }
            outcome.syllables += found;
            outcome.word = category.strip(&outcome.word);
            trace!(
                category = category.name(),
                word = %outcome.word,
                syllables = outcome.syllables,
                "exclusion category matched"
            );
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::config::{ExclusionRule, LocaleConfig, Metadata};

    fn rule(pattern: &str, syllables: u32) -> ExclusionRule {
        ExclusionRule {
            pattern: pattern.to_string(),
            syllables,
        }
    }

    fn locale(configure: impl FnOnce(&mut LocaleConfig)) -> CompiledLocale {
        let mut config = LocaleConfig {
            metadata: Metadata {
                code: "xx".to_string(),
                name: "Test".to_string(),
            },
            vowels: Default::default(),
            exclusions: Default::default(),
            adjustments: Default::default(),
        };
        configure(&mut config);
        CompiledLocale::from_config(&config).unwrap()
    }

    #[test]
    fn independent_word_is_consumed_whole() {
        let compiled = locale(|c| c.exclusions.words.push(rule("simile", 3)));
        let outcome = compiled.strip_exclusions("simile");
        assert_eq!(outcome.syllables, 3);
        assert_eq!(outcome.word, "");
    }

    #[test]
    fn unmatched_word_passes_through() {
        let compiled = locale(|c| c.exclusions.words.push(rule("simile", 3)));
        let outcome = compiled.strip_exclusions("smiles");
        assert_eq!(outcome.syllables, 0);
        assert_eq!(outcome.word, "smiles");
    }

    #[test]
    fn later_categories_see_the_reduced_word() {
        // "compounds" runs before "word_parts": once the compound prefix
        // is stripped, the word-part rule no longer finds its substring
        let compiled = locale(|c| {
            c.exclusions.compounds.push(rule("deal", 1));
            c.exclusions.word_parts.push(rule("ea", 5));
        });
        let outcome = compiled.strip_exclusions("dealer");
        assert_eq!(outcome.syllables, 1);
        assert_eq!(outcome.word, "er");
    }

    #[test]
    fn category_order_is_load_bearing() {
        // The same two matchers give different results depending on
        // which runs first; the pipeline must apply the compound one
        // first because its category precedes word_parts
        use crate::rules::compiler::CategoryMatcher;
        use crate::rules::policy::CATEGORIES;

        let compound_spec = CATEGORIES.iter().find(|s| s.name == "compounds").unwrap();
        let part_spec = CATEGORIES.iter().find(|s| s.name == "word_parts").unwrap();
        let compound = CategoryMatcher::compile(compound_spec, &[rule("deal", 1)]).unwrap();
        let part = CategoryMatcher::compile(part_spec, &[rule("ea", 5)]).unwrap();

        let word = "dealer";

        // Canonical order: compounds first
        let mut canonical = 0;
        let reduced = {
            let found = compound.count(word);
            canonical += found;
            let reduced = compound.strip(word);
            canonical += part.count(&reduced);
            reduced
        };
        assert_eq!(canonical, 1);
        assert_eq!(reduced, "er");

        // Swapped order: the word-part rule fires before the compound
        // prefix is removed, changing the total
        let mut swapped = 0;
        swapped += part.count(word);
        let reduced = part.strip(word);
        swapped += compound.count(&reduced);
        assert_eq!(swapped, 5);
        assert_ne!(canonical, swapped);

        // The pipeline reproduces the canonical order
        let compiled = locale(|c| {
            c.exclusions.compounds.push(rule("deal", 1));
            c.exclusions.word_parts.push(rule("ea", 5));
        });
        assert_eq!(compiled.strip_exclusions(word).syllables, canonical);
    }

    #[test]
    fn exclusion_pass_is_idempotent() {
        let compiled = locale(|c| {
            c.exclusions.words.push(rule("bye", 1));
            c.exclusions.compound_ends.push(rule("team", 1));
            c.exclusions.no_ns.push(rule("lease", 1));
        });

        for word in ["bye", "voetbalteam", "leasedeal", "gewoon", ""] {
            let first = compiled.strip_exclusions(word);
            let second = compiled.strip_exclusions(&first.word);
            assert_eq!(second.syllables, 0, "second pass matched for {word:?}");
            assert_eq!(second.word, first.word);
        }
    }

    #[test]
    fn stripping_never_grows_the_word() {
        let compiled = locale(|c| {
            c.exclusions.end_plural.push(rule("cocktail", 2));
            c.exclusions.no_nr.push(rule("toast", 1));
        });
        for word in ["cocktails", "toastjes", "toast", "x"] {
            let outcome = compiled.strip_exclusions(word);
            assert!(outcome.word.len() <= word.len());
        }
    }
}
