//! Stylistic checks.
//!
//! Every check is a pure function of the current word and the history
//! before it. [`Check`] is the closed list of them, in the order they run
//! for each word.
//!
//! Each check lives in its own module and can be called directly; the
//! [`Check::run`] dispatcher wraps the results into [`Finding`]s with a
//! context snippet.

pub mod contained;
pub mod expressions;
pub mod finding;
pub mod mente;
pub mod overused;
pub mod repetition;
pub mod saywords;
pub mod verbs;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use expressions::{Expression, ExpressionMatcher};
pub use finding::{Finding, FindingKind};

use crate::error::LintError;
use crate::history::WordHistory;

/// A stylistic check.
///
/// Variants are declared in run order; sorting a set of checks yields the
/// order their findings are emitted for a word.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Check {
    /// "-mente" adverbs too close together.
    Mente,
    /// The same word repeated too soon.
    Repetition,
    /// Nearby words containing one another.
    Contained,
    /// Filler vocabulary.
    Overused,
    /// Pedantic dialogue verbs.
    PedanticSayword,
    /// Usually misused dialogue verbs.
    MisusedSayword,
    /// Usually misused verb roots.
    MisusedVerb,
    /// Usually misused multi-word expressions.
    MisusedExpression,
}

impl Check {
    /// Every check, in run order.
    pub const ALL: [Self; 8] = [
        Self::Mente,
        Self::Repetition,
        Self::Contained,
        Self::Overused,
        Self::PedanticSayword,
        Self::MisusedSayword,
        Self::MisusedVerb,
        Self::MisusedExpression,
    ];

    /// Stable lowercase code used in configuration and reports.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mente => "mente",
            Self::Repetition => "repetition",
            Self::Contained => "contained",
            Self::Overused => "overused",
            Self::PedanticSayword => "pedantic-sayword",
            Self::MisusedSayword => "misused-sayword",
            Self::MisusedVerb => "misused-verb",
            Self::MisusedExpression => "misused-expression",
        }
    }

    /// One-line description for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Mente => "adverbs ending in -mente close to each other",
            Self::Repetition => "the same word repeated within a few lines",
            Self::Contained => "nearby words where one contains the other",
            Self::Overused => "filler words and verbs with better synonyms",
            Self::PedanticSayword => "pedantic dialogue verbs",
            Self::MisusedSayword => "usually misused dialogue verbs",
            Self::MisusedVerb => "usually misused verbs",
            Self::MisusedExpression => "usually misused expressions",
        }
    }

    /// How many preceding words the check looks at, if any.
    pub const fn window(self) -> Option<usize> {
        match self {
            Self::Mente => Some(mente::WINDOW),
            Self::Repetition => Some(repetition::WINDOW),
            Self::Contained => Some(contained::WINDOW),
            Self::Overused
            | Self::PedanticSayword
            | Self::MisusedSayword
            | Self::MisusedVerb
            | Self::MisusedExpression => None,
        }
    }

    /// Look up a check by its code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self, LintError> {
        let wanted = code.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| LintError::UnknownCheck {
                name: code.to_string(),
                available: Self::available_codes(),
            })
    }

    /// Comma-separated list of every check code.
    pub fn available_codes() -> String {
        Self::ALL.map(Self::code).join(", ")
    }

    /// Run the check against `word`, the current token of `history`.
    pub fn detect(self, word: &str, history: &WordHistory) -> Vec<FindingKind> {
        match self {
            Self::Mente => mente::check_mente(word, history),
            Self::Repetition => repetition::check_repetition(word, history),
            Self::Contained => contained::check_contained(word, history),
            Self::Overused => overused::check_overused(word),
            Self::PedanticSayword => saywords::check_pedantic_sayword(word),
            Self::MisusedSayword => saywords::check_misused_sayword(word),
            Self::MisusedVerb => verbs::check_misused_verb(word),
            Self::MisusedExpression => expressions::check_misused_expression(word, history),
        }
    }

    /// Run the check and attach the last `context_words` tokens to each finding.
    pub fn run(self, word: &str, history: &WordHistory, context_words: usize) -> Vec<Finding> {
        let kinds = self.detect(word, history);
        if kinds.is_empty() {
            return Vec::new();
        }
        let context = history.context(context_words);
        kinds
            .into_iter()
            .map(|kind| Finding::new(kind, context.clone()))
            .collect()
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Check {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
