//! Substring containment between nearby words ("casa" ... "casamiento").

use crate::history::WordHistory;
use crate::text::char_len;
use crate::word_lists::is_common_word;

use super::finding::FindingKind;
use super::mente::is_mente_adverb;

/// How many preceding words are compared.
pub const WINDOW: usize = 15;

/// Words shorter than this (in characters) are never compared.
pub const MIN_LENGTH: usize = 4;

/// Report earlier words that contain `word` or are contained in it.
///
/// Identical words are left to the repetition check and "-mente" adverbs to
/// the adverb check.
pub fn check_contained(word: &str, history: &WordHistory) -> Vec<FindingKind> {
    if char_len(word) < MIN_LENGTH || is_common_word(word) {
        return Vec::new();
    }

    history
        .window(WINDOW)
        .with_distances()
        .filter(|(_, old)| is_comparable(old, word))
        .filter(|(_, old)| old.contains(word) || word.contains(old))
        .map(|(distance, old)| FindingKind::Contained {
            word: word.to_string(),
            old_word: old.to_string(),
            distance,
        })
        .collect()
}

fn is_comparable(old: &str, word: &str) -> bool {
    old != word && char_len(old) >= MIN_LENGTH && !is_common_word(old) && !is_mente_adverb(old)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(word: &str, window: &[&str]) -> Vec<FindingKind> {
        let history: WordHistory = window.iter().copied().chain([word]).collect();
        check_contained(word, &history)
    }

    #[test]
    fn detects_contained_word() {
        let found = run("repetidas", &["la", "la", "la", "repetida", "su", "su", "su"]);
        assert_eq!(
            found,
            vec![FindingKind::Contained {
                word: "repetidas".into(),
                old_word: "repetida".into(),
                distance: 3,
            }]
        );
    }

    #[test]
    fn near_misses_are_not_contained() {
        let window = ["la", "la", "repetidos", "x", "el", "que", "repetides"];
        assert!(run("repetidas", &window).is_empty());
    }

    #[test]
    fn unrelated_word() {
        assert!(run("bla", &["la", "la", "la", "repetida", "su", "su", "su"]).is_empty());
    }

    #[test]
    fn works_in_both_directions() {
        assert_eq!(run("casa", &["casamiento"]).len(), 1);
        assert_eq!(run("casamiento", &["casa"]).len(), 1);
    }

    #[test]
    fn skips_identical_short_and_adverbs() {
        assert!(run("casa", &["casa"]).is_empty());
        assert!(run("sola", &["sol"]).is_empty());
        assert!(run("lenta", &["lentamente"]).is_empty());
    }

    #[test]
    fn short_trigger_is_ignored() {
        assert!(run("sol", &["soldado"]).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // "año" is 4 bytes but 3 characters
        assert!(run("año", &["años"]).is_empty());
        assert_eq!(run("años", &["añoso"]).len(), 1);
    }

    #[test]
    fn window_edge() {
        let mut window = vec!["casamiento"];
        window.extend(std::iter::repeat_n("x", WINDOW - 1));
        assert_eq!(
            run("casa", &window),
            vec![FindingKind::Contained {
                word: "casa".into(),
                old_word: "casamiento".into(),
                distance: WINDOW - 1,
            }]
        );

        window.insert(1, "x");
        assert!(run("casa", &window).is_empty());
    }
}
