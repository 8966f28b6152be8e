//! Word history and lookback windows.
//!
//! Every token of the run is appended to a [`WordHistory`]. Checks never see
//! the whole history, only a bounded window of the tokens that precede the
//! current one.

/// Append-only record of the tokens seen so far in a run.
///
/// The last pushed token is the *current* word: the one checks are
/// evaluating. It is never part of its own window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordHistory {
    words: Vec<String>,
}

impl WordHistory {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Append a token; it becomes the current word.
    pub fn push(&mut self, token: impl Into<String>) {
        self.words.push(token.into());
    }

    /// The current (most recently pushed) word.
    pub fn current(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Total number of tokens, current word included.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing has been pushed yet.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every token before the current word, oldest first.
    pub fn preceding(&self) -> &[String] {
        match self.words.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Up to `n` tokens immediately before the current word, oldest first.
    ///
    /// Clamped to the available history near the start of a run.
    pub fn window(&self, n: usize) -> Window<'_> {
        let preceding = self.preceding();
        let start = preceding.len().saturating_sub(n);
        Window {
            words: &preceding[start..],
        }
    }

    /// The last `k` tokens, current word included, joined by spaces.
    pub fn context(&self, k: usize) -> String {
        let start = self.words.len().saturating_sub(k);
        self.words[start..].join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for WordHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A bounded view of the tokens preceding the current word.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    words: &'a [String],
}

impl<'a> Window<'a> {
    /// Number of tokens in the window (`min(requested, available)`).
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there is no preceding token.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tokens oldest first.
    pub const fn words(&self) -> &'a [String] {
        self.words
    }

    /// Iterate `(distance, token)` pairs, oldest first.
    ///
    /// Distance 0 is the word right before the current one.
    pub fn with_distances(&self) -> impl Iterator<Item = (usize, &'a str)> + use<'a> {
        let words = self.words;
        let len = words.len();
        words
            .iter()
            .enumerate()
            .map(move |(pos, w)| (len - pos - 1, w.as_str()))
    }
}
