//! Add/subtract corrections to the vowel-cluster estimate

use regex::Regex;

use crate::error::{Result, RuleError};

/// Compiled add/subtract pattern lists for one locale
///
/// Each list is combined into a single case-insensitive alternation so
/// one scan finds every match; every match is worth exactly one
/// syllable. The delta corrects the cluster counter for known spelling
/// patterns (silent vowel clusters, diphthongs) without phonetic
/// analysis.
#[derive(Debug, Clone)]
pub struct AdjustmentSet {
    add: Option<Regex>,
    subtract: Option<Regex>,
}

impl AdjustmentSet {
    /// Compile the add and subtract pattern lists
    pub fn compile(add: &[String], subtract: &[String]) -> Result<Self> {
        Ok(Self {
            add: combine("add", add)?,
            subtract: combine("subtract", subtract)?,
        })
    }

    /// Signed syllable correction for a word: add matches minus
    /// subtract matches
    pub fn delta(&self, word: &str) -> i64 {
        let added = match_count(&self.add, word);
        let subtracted = match_count(&self.subtract, word);
        added as i64 - subtracted as i64
    }
}

/// Combine bare patterns into one alternation; empty lists compile to
/// no matcher at all
fn combine(category: &str, patterns: &[String]) -> Result<Option<Regex>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let source = format!("(?i)({})", patterns.join(")|("));
    let regex = Regex::new(&source).map_err(|e| RuleError::RuleData {
        category: category.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Some(regex))
}

fn match_count(regex: &Option<Regex>, word: &str) -> usize {
    regex
        .as_ref()
        .map_or(0, |re| re.find_iter(word).count())
}
