//! Usually misused verbs, matched by root.

use crate::word_lists::{MISUSED_VERB_ROOTS, VerbRoot};

use super::finding::FindingKind;

/// Flag `word` if it starts with a misused verb root.
///
/// Only the first root in table order that prefixes `word` is considered;
/// if `word` is one of that root's exempt forms nothing is reported.
pub fn check_misused_verb(word: &str) -> Vec<FindingKind> {
    let Some(VerbRoot { root, exempt }) = MISUSED_VERB_ROOTS
        .iter()
        .find(|entry| word.starts_with(entry.root))
    else {
        return Vec::new();
    };

    if exempt.iter().any(|form| *form == word) {
        return Vec::new();
    }

    vec![FindingKind::MisusedVerb {
        word: word.to_string(),
        root: (*root).to_string(),
    }]
}
