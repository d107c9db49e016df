//! Compilation of locale rule tables into matchers
//!
//! Turns the raw rule lists of a [`LocaleConfig`] into the matchers the
//! per-word pipeline runs: one [`CategoryMatcher`] per non-empty
//! exclusion category (in application order), an [`AdjustmentSet`], and
//! a [`VowelSet`].

use std::path::Path;

use regex::Regex;

use crate::error::{Result, RuleError};
use crate::locale::config::{ExclusionRule, LocaleConfig};
use crate::rules::adjustment::AdjustmentSet;
use crate::rules::policy::{CategorySpec, CATEGORIES};
use crate::rules::vowels::VowelSet;

/// One exclusion rule compiled under its category's boundary policy
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) regex: Regex,
    pub(crate) syllables: u32,
}

/// A compiled exclusion category
///
/// Counting scans each rule's regex separately and sums
/// `match_count x syllables` per rule, so a word matching two rules of
/// the same category collects both contributions. Stripping uses the
/// combined alternation of all rules in one `replace_all` pass.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    name: &'static str,
    rules: Vec<CompiledRule>,
    strip: Regex,
}

impl CategoryMatcher {
    /// Compile a category's rule list under its boundary policy
    pub fn compile(spec: &CategorySpec, rules: &[ExclusionRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut sources = Vec::with_capacity(rules.len());

        for rule in rules {
            let source = spec.policy.regex_source(&rule.pattern);
            let regex = Regex::new(&format!("(?i){source}")).map_err(|e| RuleError::RuleData {
                category: spec.name.to_string(),
                reason: format!("pattern '{}': {e}", rule.pattern),
            })?;
            compiled.push(CompiledRule {
                regex,
                syllables: rule.syllables,
            });
            sources.push(source);
        }

        let strip =
            Regex::new(&format!("(?i)({})", sources.join(")|("))).map_err(|e| {
                RuleError::RuleData {
                    category: spec.name.to_string(),
                    reason: e.to_string(),
                }
            })?;

        Ok(Self {
            name: spec.name,
            rules: compiled,
            strip,
        })
    }

    /// Category name, for diagnostics and tracing
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Known syllables contributed by this category for the word as it
    /// currently stands
    pub fn count(&self, word: &str) -> u64 {
        self.rules
            .iter()
            .map(|rule| rule.regex.find_iter(word).count() as u64 * u64::from(rule.syllables))
            .sum()
    }

    /// Remove every occurrence matched by this category
    pub fn strip(&self, word: &str) -> String {
        self.strip.replace_all(word, "").into_owned()
    }
}

/// All matchers for one locale, compiled once and shared read-only
#[derive(Debug, Clone)]
pub struct CompiledLocale {
    code: String,
    name: String,
    categories: Vec<CategoryMatcher>,
    vowels: VowelSet,
    adjustments: AdjustmentSet,
}

impl CompiledLocale {
    /// Compile matchers from a locale configuration
    pub fn from_config(config: &LocaleConfig) -> Result<Self> {
        config.validate()?;

        let mut categories = Vec::new();
        for spec in &CATEGORIES {
            let rules = config.exclusions.category(spec.name);
            if rules.is_empty() {
                continue;
            }
            categories.push(CategoryMatcher::compile(spec, rules)?);
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            categories,
            vowels: VowelSet::new(&config.vowels.chars),
            adjustments: AdjustmentSet::compile(
                &config.adjustments.add,
                &config.adjustments.subtract,
            )?,
        })
    }

    /// Compile matchers from an external TOML rule table
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::Configuration(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        let config: LocaleConfig = toml::from_str(&content).map_err(|e| {
            RuleError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_config(&config)
    }

    /// Locale code this rule set was compiled for
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable locale name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled exclusion categories, in application order
    pub(crate) fn categories(&self) -> &[CategoryMatcher] {
        &self.categories
    }

    /// The locale's vowel class
    pub fn vowels(&self) -> &VowelSet {
        &self.vowels
    }

    /// The locale's add/subtract corrections
    pub fn adjustments(&self) -> &AdjustmentSet {
        &self.adjustments
    }
}
