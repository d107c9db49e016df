//! Boundary policies for exclusion categories
//!
//! Every exclusion category matches its patterns under one of eight
//! boundary policies. The policy decides where in the word a pattern may
//! match and which trailing letters disqualify a match. The fourteen
//! categories and their application order live in [`CATEGORIES`].

/// Where a category's patterns may match, and which letters after the
/// match disqualify it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// The pattern must be the whole word
    Independent,
    /// Anywhere in the word, unless immediately followed by one of the
    /// listed letters; a match at the literal end always counts
    Anywhere {
        /// Disqualifying trailing letters
        not_followed_by: &'static str,
    },
    /// Start or end of the word, with disqualifying trailing letters
    BeginEnd {
        /// Disqualifying trailing letters
        not_followed_by: &'static str,
    },
    /// Start of the word only, with disqualifying trailing letters
    Begin {
        /// Disqualifying trailing letters
        not_followed_by: &'static str,
    },
    /// Anywhere in the word, as a bare substring
    WordPart,
    /// Start or end of the word
    Compound,
    /// End of the word only
    CompoundEnd,
    /// Start or end of the word, with an optional trailing `s`
    EndPlural,
}

impl BoundaryPolicy {
    /// Build the regex source for one pattern word under this policy
    ///
    /// The shapes reproduce the rule-table semantics exactly: the
    /// "not followed by" variants consume the trailing letter, and every
    /// anywhere/begin-end variant also accepts the pattern at the literal
    /// end of the word.
    pub fn regex_source(&self, pattern: &str) -> String {
        match self {
            BoundaryPolicy::Independent => format!("(^{pattern}$)"),
            BoundaryPolicy::Anywhere { not_followed_by } => {
                format!("({pattern}[^{not_followed_by}])|({pattern}$)")
            }
            BoundaryPolicy::BeginEnd { not_followed_by } => {
                format!("(^{pattern}[^{not_followed_by}])|({pattern}$)")
            }
            BoundaryPolicy::Begin { not_followed_by } => {
                format!("(^{pattern}[^{not_followed_by}])|(^{pattern}$)")
            }
            BoundaryPolicy::WordPart => format!("({pattern})"),
            BoundaryPolicy::Compound => format!("^({pattern})|({pattern}$)"),
            BoundaryPolicy::CompoundEnd => format!("({pattern}$)"),
            BoundaryPolicy::EndPlural => format!("^({pattern}s?)|({pattern}s?$)"),
        }
    }
}

/// A named exclusion category bound to its policy
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    /// Category name; also the field name in the TOML rule table
    pub name: &'static str,
    /// Boundary policy applied to every pattern in the category
    pub policy: BoundaryPolicy,
}

/// The fourteen exclusion categories in application order
///
/// The order is significant: each category runs against the word already
/// reduced by the categories before it, so reordering changes results.
pub const CATEGORIES: [CategorySpec; 14] = [
    CategorySpec {
        name: "words",
        policy: BoundaryPolicy::Independent,
    },
    CategorySpec {
        name: "compounds",
        policy: BoundaryPolicy::Compound,
    },
    CategorySpec {
        name: "compound_ends",
        policy: BoundaryPolicy::CompoundEnd,
    },
    CategorySpec {
        name: "word_parts",
        policy: BoundaryPolicy::WordPart,
    },
    CategorySpec {
        name: "end_plural",
        policy: BoundaryPolicy::EndPlural,
    },
    CategorySpec {
        name: "begin_end_no_s",
        policy: BoundaryPolicy::BeginEnd {
            not_followed_by: "s",
        },
    },
    CategorySpec {
        name: "begin_no_s",
        policy: BoundaryPolicy::Begin {
            not_followed_by: "s",
        },
    },
    CategorySpec {
        name: "no_n",
        policy: BoundaryPolicy::Anywhere {
            not_followed_by: "n",
        },
    },
    CategorySpec {
        name: "no_ns",
        policy: BoundaryPolicy::Anywhere {
            not_followed_by: "ns",
        },
    },
    CategorySpec {
        name: "no_rs",
        policy: BoundaryPolicy::Anywhere {
            not_followed_by: "rs",
        },
    },
    CategorySpec {
        name: "no_nr",
        policy: BoundaryPolicy::Anywhere {
            not_followed_by: "nr",
        },
    },
    CategorySpec {
        name: "begin_end_no_nr",
        policy: BoundaryPolicy::BeginEnd {
            not_followed_by: "nr",
        },
    },
    CategorySpec {
        name: "no_nrs",
        policy: BoundaryPolicy::Anywhere {
            not_followed_by: "nrs",
        },
    },
    CategorySpec {
        name: "begin_end_no_nrs",
        policy: BoundaryPolicy::BeginEnd {
            not_followed_by: "nrs",
        },
    },
];

/// Category names in application order
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn compile(policy: BoundaryPolicy, pattern: &str) -> Regex {
        Regex::new(&format!("(?i){}", policy.regex_source(pattern))).unwrap()
    }

    #[test]
    fn independent_matches_whole_word_only() {
        let re = compile(BoundaryPolicy::Independent, "bye");
        assert!(re.is_match("bye"));
        assert!(re.is_match("Bye"));
        assert!(!re.is_match("goodbye"));
        assert!(!re.is_match("byes"));
    }

    #[test]
    fn anywhere_respects_disqualifying_letters() {
        let re = compile(
            BoundaryPolicy::Anywhere {
                not_followed_by: "ns",
            },
            "lease",
        );
        // Interior occurrence followed by an allowed letter
        assert!(re.is_match("leased"));
        // Word-final occurrence always matches
        assert!(re.is_match("lease"));
        assert!(re.is_match("sublease"));
        // Followed by a disqualifying letter
        assert!(!re.is_match("leasen"));
        assert!(!re.is_match("leases"));
    }

    #[test]
    fn begin_end_restricts_interior_matches_to_word_start() {
        let re = compile(
            BoundaryPolicy::BeginEnd {
                not_followed_by: "s",
            },
            "face",
        );
        assert!(re.is_match("faced"));
        assert!(re.is_match("poker-face"));
        assert!(!re.is_match("faces"));
        // Interior occurrence away from both ends does not match
        assert!(!re.is_match("unfacedly"));
    }

    #[test]
    fn begin_only_ignores_word_end() {
        let re = compile(
            BoundaryPolicy::Begin {
                not_followed_by: "s",
            },
            "coke",
        );
        assert!(re.is_match("coke"));
        assert!(re.is_match("coked"));
        assert!(!re.is_match("cokes"));
        assert!(!re.is_match("decoke"));
    }

    #[test]
    fn compound_matches_start_or_end() {
        let re = compile(BoundaryPolicy::Compound, "deal");
        assert!(re.is_match("dealmaker"));
        assert!(re.is_match("nodeal"));
        // Interior occurrence away from both ends does not match
        assert!(!re.is_match("misdealt"));
    }

    #[test]
    fn compound_end_matches_end_only() {
        let re = compile(BoundaryPolicy::CompoundEnd, "team");
        assert!(re.is_match("voetbalteam"));
        assert!(!re.is_match("teamgeest"));
    }

    #[test]
    fn end_plural_accepts_optional_trailing_s() {
        let re = compile(BoundaryPolicy::EndPlural, "cocktail");
        assert!(re.is_match("cocktail"));
        assert!(re.is_match("cocktails"));
        assert!(re.is_match("fruitcocktails"));
    }

    #[test]
    fn categories_are_in_application_order() {
        let names: Vec<_> = category_names().collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "words");
        assert_eq!(names[1], "compounds");
        assert_eq!(names[4], "end_plural");
        assert_eq!(names[13], "begin_end_no_nrs");
    }
}
