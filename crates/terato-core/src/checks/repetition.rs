//! Close repetition of the same word.

use crate::history::WordHistory;
use crate::word_lists::is_common_word;

use super::finding::FindingKind;

/// How many preceding words are searched for a repetition.
pub const WINDOW: usize = 50;

/// Report every identical occurrence of `word` within [`WINDOW`] words.
///
/// Only exact matches count: no stemming, no plural folding.
pub fn check_repetition(word: &str, history: &WordHistory) -> Vec<FindingKind> {
    if is_common_word(word) {
        return Vec::new();
    }

    history
        .window(WINDOW)
        .with_distances()
        .filter(|(_, old)| *old == word)
        .map(|(distance, _)| FindingKind::Repetition {
            word: word.to_string(),
            distance,
        })
        .collect()
}
