//! Curated word lists for Spanish prose.
//!
//! Closed-class words exempt from repetition analysis, dialogue verbs,
//! overused vocabulary patterns, misused verb roots, and misused multi-word
//! expressions. All entries are already normalized (lowercase, alphanumeric).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Closed-class words never analyzed for repetition or containment.
///
/// Articles, pronouns, conjunctions, prepositions, auxiliary "haber" forms,
/// the neutral dialogue verbs, and most forms of "ser" (only uncommon,
/// longer conjugations are left out so they can still be flagged).
pub static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "el", "él", "lo", "la", "le", "los", "las", "que", "qué", "cual", "cuál", "cuales",
        "como", "cómo", "este", "éste", "esta", "ésta", "ese", "esa", "eso", "esos", "aquel",
        "aquello", "aquella", "aquellos", "aquellas", "y", "o", "ha", "han", "con", "sin",
        "desde", "ya", "se", "de", "un", "uno", "unos", "una", "unas", "ante", "para", "mas",
        "más", "en", "por", "mi", "mis", "si", "sí", "no", "hasta", "su", "sus", "tus",
        "sobre", "del", "a", "e", "pero", "había", "habías", "habían", "habría", "habrías",
        "habrían", "al", "haya", "otra", "me", "te", "ni", "les", "hecho", "dijo", "dije",
        "preguntó", "pregunté",
        // ser
        "ser", "sea", "sean", "soy", "eres", "es", "somos", "sois", "son", "era", "eras",
        "érais", "eran", "seré", "serás", "será", "seréis", "serán", "sido", "sería",
        "serías", "seríamos", "seríais", "serían", "fui", "fuiste", "fue", "fuimos",
        "fueron", "sé", "sed", "fuera", "fueras", "fuese", "fueses", "fuesen", "siendo",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `token` is a closed-class word.
pub fn is_common_word(token: &str) -> bool {
    COMMON_WORDS.contains(token)
}

/// Dialogue-attribution verbs that usually read as pedantic.
pub static PEDANTIC_SAYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "rebuznó", "rugió", "rugí", "bramó", "bramé", "declaró", "declaré", "inquirió",
        "inquirí", "sostuvo", "sostuve", "refirió", "referí", "aseveró", "aseveré", "arguyó",
        "argüí",
    ]
    .into_iter()
    .collect()
});

/// Dialogue-attribution verbs that are usually misused.
pub static MISUSED_SAYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "comentó", "comenté", "interrogó", "interrogué", "amenazó", "amenacé", "conminó",
        "conminé", "exhortó", "exhorté", "aludió", "aludí",
    ]
    .into_iter()
    .collect()
});

/// Filler nouns and wildcard verbs with plenty of better synonyms.
///
/// Glob patterns, matched in order. Nouns come first, then verbs.
pub const OVERUSED_PATTERNS: &[&str] = &[
    "sonido*", "ruido*", "cosa*", "provoc*", "usar", "usó", "usamos", "usab*", "usáb",
    "usas*", "usar*", "usad*", "emplea*",
];

/// A verb root that is usually misused, with derived words that are fine.
#[derive(Debug, Clone, Copy)]
pub struct VerbRoot {
    /// Prefix shared by every conjugation of the verb.
    pub root: &'static str,
    /// Non-verbal words starting with the same root (nouns, participles used
    /// as adjectives) that must not be flagged.
    pub exempt: &'static [&'static str],
}

/// Misused verb roots, evaluated in order; only the first matching root counts.
pub const MISUSED_VERB_ROOTS: &[VerbRoot] = &[
    VerbRoot { root: "espet", exempt: &["espeto", "espetos"] },
    VerbRoot { root: "mascull", exempt: &[] },
    VerbRoot { root: "perl", exempt: &["perla", "perlas"] },
    VerbRoot { root: "empalid", exempt: &[] },
    VerbRoot { root: "tinti", exempt: &[] },
    VerbRoot {
        root: "manten",
        exempt: &["mantenido", "mantenida", "mantenidos", "mantenidas"],
    },
    VerbRoot { root: "mantuv", exempt: &[] },
    VerbRoot {
        root: "tamboril",
        exempt: &["tamborilero", "tamborilera", "tamborileros", "tamborileras"],
    },
];

/// Multi-word expressions that are usually misused, in reading order.
///
/// Every word may be a glob pattern except the last one, which must be a
/// literal word.
pub const MISUSED_EXPRESSIONS: &[&[&str]] = &[
    &["sacud*", "la", "cabeza"],
    &["perlab*", "*", "frente"],
    &["provoc*", "*", "polémica"],
    // usually anglicisms, obvious from the context
    &["qued*", "de", "pie"],
    &["esta*", "de", "pie"],
    &["encontr*", "de", "pie"],
    &["qued*", "sentado"],
    &["qued*", "sentada"],
    &["qued*", "sentados"],
    &["qued*", "sentadas"],
    &["esta*", "sentado"],
    &["esta*", "sentada"],
    &["esta*", "sentados"],
    &["esta*", "sentadas"],
    &["encontr*", "sentado"],
    &["encontr*", "sentada"],
    &["encontr*", "sentados"],
    &["encontr*", "sentadas"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_include_ser_forms() {
        assert!(is_common_word("fue"));
        assert!(is_common_word("siendo"));
        assert!(!is_common_word("seremos"));
    }

    #[test]
    fn sayword_tables_are_disjoint() {
        assert!(PEDANTIC_SAYWORDS.is_disjoint(&MISUSED_SAYWORDS));
    }

    #[test]
    fn neutral_saywords_are_common() {
        assert!(is_common_word("dijo"));
        assert!(!PEDANTIC_SAYWORDS.contains("dijo"));
        assert!(!MISUSED_SAYWORDS.contains("dijo"));
    }

    #[test]
    fn expressions_have_at_least_two_words() {
        assert!(MISUSED_EXPRESSIONS.iter().all(|e| e.len() >= 2));
    }

    #[test]
    fn expression_anchors_are_literal() {
        for expression in MISUSED_EXPRESSIONS {
            let anchor = expression[expression.len() - 1];
            assert!(!anchor.contains(['*', '?', '[', '{']), "pattern anchor: {anchor}");
        }
    }
}
