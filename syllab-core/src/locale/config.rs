//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale rule tables.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Root locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub vowels: Vowels,
    #[serde(default)]
    pub exclusions: Exclusions,
    #[serde(default)]
    pub adjustments: Adjustments,
}

/// Locale metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// The character class the cluster counter treats as vowels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vowels {
    #[serde(default = "default_vowel_chars")]
    pub chars: String,
}

impl Default for Vowels {
    fn default() -> Self {
        Self {
            chars: default_vowel_chars(),
        }
    }
}

/// Base vowels, their accented forms, and `y`
fn default_vowel_chars() -> String {
    "aáäâeéëêiíïîoóöôuúüûy".to_string()
}

/// One exclusion rule: a pattern word with a known syllable count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionRule {
    pub pattern: String,
    pub syllables: u32,
}

/// Exclusion rule lists, one per category
///
/// A category missing from the TOML document is an empty list, not an
/// error. Field names double as category names in diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exclusions {
    #[serde(default)]
    pub words: Vec<ExclusionRule>,
    #[serde(default)]
    pub compounds: Vec<ExclusionRule>,
    #[serde(default)]
    pub compound_ends: Vec<ExclusionRule>,
    #[serde(default)]
    pub word_parts: Vec<ExclusionRule>,
    #[serde(default)]
    pub end_plural: Vec<ExclusionRule>,
    #[serde(default)]
    pub begin_end_no_s: Vec<ExclusionRule>,
    #[serde(default)]
    pub begin_no_s: Vec<ExclusionRule>,
    #[serde(default)]
    pub no_n: Vec<ExclusionRule>,
    #[serde(default)]
    pub no_ns: Vec<ExclusionRule>,
    #[serde(default)]
    pub no_rs: Vec<ExclusionRule>,
    #[serde(default)]
    pub no_nr: Vec<ExclusionRule>,
    #[serde(default)]
    pub begin_end_no_nr: Vec<ExclusionRule>,
    #[serde(default)]
    pub no_nrs: Vec<ExclusionRule>,
    #[serde(default)]
    pub begin_end_no_nrs: Vec<ExclusionRule>,
}

impl Exclusions {
    /// Look up a category's rule list by name
    pub fn category(&self, name: &str) -> &[ExclusionRule] {
        match name {
            "words" => &self.words,
            "compounds" => &self.compounds,
            "compound_ends" => &self.compound_ends,
            "word_parts" => &self.word_parts,
            "end_plural" => &self.end_plural,
            "begin_end_no_s" => &self.begin_end_no_s,
            "begin_no_s" => &self.begin_no_s,
            "no_n" => &self.no_n,
            "no_ns" => &self.no_ns,
            "no_rs" => &self.no_rs,
            "no_nr" => &self.no_nr,
            "begin_end_no_nr" => &self.begin_end_no_nr,
            "no_nrs" => &self.no_nrs,
            "begin_end_no_nrs" => &self.begin_end_no_nrs,
            _ => &[],
        }
    }
}

/// Add/subtract pattern lists correcting the cluster counter
///
/// Each match is worth exactly one syllable; patterns carry no weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Adjustments {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub subtract: Vec<String>,
}

impl LocaleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.vowels.chars.is_empty() {
            return Err(RuleError::Configuration(
                "No vowel characters defined".to_string(),
            ));
        }

        for name in crate::rules::category_names() {
            for rule in self.exclusions.category(name) {
                if rule.pattern.is_empty() {
                    return Err(RuleError::RuleData {
                        category: name.to_string(),
                        reason: "empty pattern".to_string(),
                    });
                }
            }
        }

        for (name, patterns) in [
            ("add", &self.adjustments.add),
            ("subtract", &self.adjustments.subtract),
        ] {
            if patterns.iter().any(|p| p.is_empty()) {
                return Err(RuleError::RuleData {
                    category: name.to_string(),
                    reason: "empty pattern".to_string(),
                });
            }
        }

        Ok(())
    }
}
