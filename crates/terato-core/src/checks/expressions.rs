//! Misused multi-word expressions.
//!
//! Expressions are written in reading order ("sacud* la cabeza") and may use
//! glob wildcards in every word but the last. Matching runs backward from
//! the current word, so each expression is stored reversed and keyed by its
//! last word (the *anchor*), which must be literal: a word that is not an
//! anchor can be rejected with a single set lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

use globset::{Glob, GlobMatcher};

use crate::history::WordHistory;
use crate::word_lists::MISUSED_EXPRESSIONS;

use super::finding::FindingKind;

static MISUSED: LazyLock<ExpressionMatcher> =
    LazyLock::new(|| ExpressionMatcher::new(MISUSED_EXPRESSIONS.iter().copied()));

/// Characters that make a word a glob pattern rather than a literal.
const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

/// A multi-word expression compiled for backward matching.
#[derive(Debug, Clone)]
pub struct Expression {
    /// Patterns in reading order, for reporting.
    words: Vec<String>,
    /// Compiled patterns, last word first.
    reversed: Vec<GlobMatcher>,
}

impl Expression {
    /// Compile an expression written in reading order.
    ///
    /// Returns `None` (with a warning) for an empty expression, a non-literal
    /// last word, or a word that is not a valid glob.
    pub fn compile(words: &[&str]) -> Option<Self> {
        let Some(anchor) = words.last() else {
            tracing::warn!("skipping empty expression");
            return None;
        };
        if anchor.contains(GLOB_META) {
            tracing::warn!(anchor, "skipping expression whose last word is a pattern");
            return None;
        }

        let mut reversed = Vec::with_capacity(words.len());
        for pattern in words.iter().rev() {
            match Glob::new(pattern) {
                Ok(glob) => reversed.push(glob.compile_matcher()),
                Err(e) => {
                    tracing::warn!(pattern, error = %e, "skipping expression with invalid pattern");
                    return None;
                }
            }
        }

        Some(Self {
            words: words.iter().map(|w| (*w).to_string()).collect(),
            reversed,
        })
    }

    /// The expression in reading order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the expression.
    pub const fn len(&self) -> usize {
        self.reversed.len()
    }

    /// Always `false`: empty expressions are rejected by [`Expression::compile`].
    pub const fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    /// The literal last word.
    pub fn anchor(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }

    /// Does the expression end at `word`, given the words before it?
    ///
    /// `preceding` is oldest first; its last element is the word right
    /// before `word`.
    pub fn matches(&self, word: &str, preceding: &[String]) -> bool {
        if self.reversed.len() > preceding.len() + 1 {
            return false;
        }

        let mut patterns = self.reversed.iter();
        match patterns.next() {
            Some(last) if last.is_match(word) => {}
            _ => return false,
        }

        patterns
            .zip(preceding.iter().rev())
            .all(|(pattern, old)| pattern.is_match(old))
    }
}

/// A set of expressions with an anchor index for cheap rejection.
#[derive(Debug, Clone, Default)]
pub struct ExpressionMatcher {
    expressions: Vec<Expression>,
    anchors: HashSet<String>,
}

impl ExpressionMatcher {
    /// Compile expressions written in reading order.
    ///
    /// Registration order is kept: when two expressions could match the same
    /// words, the earlier one wins. Invalid expressions are skipped.
    pub fn new<'a, I>(expressions: I) -> Self
    where
        I: IntoIterator<Item = &'a [&'a str]>,
    {
        let expressions: Vec<Expression> = expressions
            .into_iter()
            .filter_map(Expression::compile)
            .collect();
        let anchors = expressions.iter().map(|e| e.anchor().to_string()).collect();
        tracing::debug!(count = expressions.len(), "compiled expressions");
        Self {
            expressions,
            anchors,
        }
    }

    /// Returns `true` if some expression ends with `word`.
    pub fn is_anchor(&self, word: &str) -> bool {
        self.anchors.contains(word)
    }

    /// Number of compiled expressions.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Returns `true` if no expression compiled.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Find the first expression that ends at `word`.
    ///
    /// `history` holds `word` as its current (last) token; the words before
    /// it are matched against the rest of the expression.
    pub fn find(&self, word: &str, history: &WordHistory) -> Option<&Expression> {
        if !self.is_anchor(word) {
            return None;
        }
        let preceding = history.preceding();
        self.expressions.iter().find(|e| e.matches(word, preceding))
    }
}

/// Flag a misused expression ending at `word`.
pub fn check_misused_expression(word: &str, history: &WordHistory) -> Vec<FindingKind> {
    MISUSED
        .find(word, history)
        .map(|expression| FindingKind::MisusedExpression {
            word: word.to_string(),
            expression: expression.words().to_vec(),
        })
        .into_iter()
        .collect()
}
