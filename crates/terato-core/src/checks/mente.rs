//! Adverb clustering: "-mente" adverbs too close to each other.

use crate::history::WordHistory;

use super::finding::FindingKind;

/// How many preceding words are searched for another adverb.
pub const WINDOW: usize = 100;

/// Suffix of Spanish manner adverbs.
pub const SUFFIX: &str = "mente";

/// Returns `true` for a "-mente" adverb (the bare word "mente" is not one).
pub fn is_mente_adverb(word: &str) -> bool {
    word != SUFFIX && word.ends_with(SUFFIX)
}

/// Report every earlier "-mente" adverb within [`WINDOW`] words of `word`.
pub fn check_mente(word: &str, history: &WordHistory) -> Vec<FindingKind> {
    if !is_mente_adverb(word) {
        return Vec::new();
    }

    history
        .window(WINDOW)
        .with_distances()
        .filter(|(_, old)| is_mente_adverb(old))
        .map(|(distance, old)| FindingKind::Mente {
            word: word.to_string(),
            old_word: old.to_string(),
            distance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(word: &str, window: &[&str]) -> Vec<FindingKind> {
        let history: WordHistory = window.iter().copied().chain([word]).collect();
        check_mente(word, &history)
    }

    #[test]
    fn detects_previous_adverb() {
        let found = run("raramente", &["a", "a", "a", "facilmente", "b", "b", "b"]);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0],
            FindingKind::Mente {
                word: "raramente".into(),
                old_word: "facilmente".into(),
                distance: 3,
            }
        );
    }

    #[test]
    fn no_adverb_in_window() {
        assert!(run("raramente", &["a", "a", "a", "x", "b", "b", "b"]).is_empty());
    }

    #[test]
    fn non_adverb_never_triggers() {
        assert!(run("bla", &["a", "a", "a", "facilmente", "b", "b", "b"]).is_empty());
    }

    #[test]
    fn bare_mente_is_ignored() {
        assert!(run("mente", &["facilmente"]).is_empty());
        assert!(run("raramente", &["mente"]).is_empty());
    }

    #[test]
    fn reports_every_adverb_in_range() {
        let found = run("raramente", &["lentamente", "x", "suavemente"]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn adverb_beyond_window_is_not_reported() {
        let mut window = vec!["lentamente"];
        window.extend(std::iter::repeat_n("x", WINDOW));
        assert!(run("raramente", &window).is_empty());

        window.remove(1);
        let found = run("raramente", &window);
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0], FindingKind::Mente { distance, .. } if distance == WINDOW - 1));
    }
}
