//! Dialogue-attribution verbs that are pedantic or misused.

use crate::word_lists::{MISUSED_SAYWORDS, PEDANTIC_SAYWORDS};

use super::finding::FindingKind;

/// Flag a pedantic dialogue verb ("bramó", "inquirió").
pub fn check_pedantic_sayword(word: &str) -> Vec<FindingKind> {
    if PEDANTIC_SAYWORDS.contains(word) {
        vec![FindingKind::PedanticSayword {
            word: word.to_string(),
        }]
    } else {
        Vec::new()
    }
}

/// Flag a usually misused dialogue verb ("comentó", "aludió").
pub fn check_misused_sayword(word: &str) -> Vec<FindingKind> {
    if MISUSED_SAYWORDS.contains(word) {
        vec![FindingKind::MisusedSayword {
            word: word.to_string(),
        }]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pedantic_verb_detected() {
        assert_eq!(check_pedantic_sayword("rebuznó").len(), 1);
        assert!(check_misused_sayword("rebuznó").is_empty());
    }

    #[test]
    fn misused_verb_detected() {
        assert_eq!(check_misused_sayword("comentó").len(), 1);
        assert!(check_pedantic_sayword("comentó").is_empty());
    }

    #[test]
    fn neutral_verb_passes() {
        assert!(check_pedantic_sayword("dijo").is_empty());
        assert!(check_misused_sayword("dijo").is_empty());
    }

    #[test]
    fn needs_exact_form() {
        // without the accent it is a different token
        assert!(check_pedantic_sayword("rebuzno").is_empty());
    }
}
