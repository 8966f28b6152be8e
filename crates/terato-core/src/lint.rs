//! Lint execution engine.
//!
//! A [`Linter`] holds the immutable setup of a run (which checks, how much
//! context to quote). Each run gets its own [`LintSession`], which owns the
//! word history and the findings collected so far.

use crate::checks::Check;
use crate::history::WordHistory;
use crate::registry::CheckRegistry;
use crate::report::{FindingsAggregator, LintReport, Page};
use crate::source::SourceWord;
use crate::word_lists::is_common_word;

/// Default number of tokens quoted as context for each finding.
pub const DEFAULT_CONTEXT_WORDS: usize = 6;

/// Run configuration shared by every session.
#[derive(Debug, Clone)]
pub struct Linter {
    checks: Vec<Check>,
    context_words: usize,
}

impl Linter {
    /// A linter running the checks enabled in `registry`.
    pub fn new(registry: &CheckRegistry) -> Self {
        Self {
            checks: registry.enabled().collect(),
            context_words: DEFAULT_CONTEXT_WORDS,
        }
    }

    /// Quote the last `k` tokens as context (at least the triggering word).
    #[must_use]
    pub fn with_context_words(mut self, k: usize) -> Self {
        self.context_words = k.max(1);
        self
    }

    /// The checks that run, in order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Tokens quoted as context.
    pub const fn context_words(&self) -> usize {
        self.context_words
    }

    /// Start a fresh run.
    pub fn session(&self) -> LintSession<'_> {
        LintSession {
            linter: self,
            history: WordHistory::new(),
            findings: FindingsAggregator::new(),
            words_checked: 0,
        }
    }

    /// Lint a whole source.
    #[tracing::instrument(skip_all, fields(checks = self.checks.len()))]
    pub fn run<I>(&self, words: I) -> LintReport
    where
        I: IntoIterator<Item = SourceWord>,
    {
        let mut session = self.session();
        for word in words {
            session.feed(word.token, word.page);
        }
        session.finish()
    }
}

/// State of one run: the history and the findings so far.
#[derive(Debug)]
pub struct LintSession<'a> {
    linter: &'a Linter,
    history: WordHistory,
    findings: FindingsAggregator,
    words_checked: usize,
}

impl LintSession<'_> {
    /// Process one token read from `page`.
    ///
    /// Empty tokens are dropped. Every other token enters the history, but
    /// common words are never checked themselves.
    pub fn feed(&mut self, token: impl Into<String>, page: Page) {
        let token = token.into();
        if token.is_empty() {
            return;
        }
        self.history.push(token);

        let Some(word) = self.history.current() else {
            return;
        };
        if is_common_word(word) {
            return;
        }
        self.words_checked += 1;

        for check in &self.linter.checks {
            let group = check.run(word, &self.history, self.linter.context_words);
            if !group.is_empty() {
                tracing::trace!(check = %check, word, count = group.len(), "findings");
            }
            self.findings.record(page, group);
        }
    }

    /// Findings recorded so far.
    pub const fn findings_so_far(&self) -> usize {
        self.findings.total()
    }

    /// Non-empty tokens processed so far.
    pub const fn words_read(&self) -> usize {
        self.history.len()
    }

    /// End the run.
    pub fn finish(self) -> LintReport {
        let words_read = self.history.len();
        tracing::debug!(
            words_read,
            words_checked = self.words_checked,
            findings = self.findings.total(),
            "lint finished"
        );
        self.findings.into_report(words_read, self.words_checked)
    }
}
