//! Overused filler vocabulary.

use std::sync::LazyLock;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::word_lists::OVERUSED_PATTERNS;

use super::finding::FindingKind;

/// Compiled patterns plus the source text of each, index-aligned.
static OVERUSED: LazyLock<(GlobSet, Vec<&'static str>)> = LazyLock::new(|| {
    let mut builder = GlobSetBuilder::new();
    let mut kept = Vec::with_capacity(OVERUSED_PATTERNS.len());
    for pattern in OVERUSED_PATTERNS {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
                kept.push(*pattern);
            }
            Err(e) => tracing::warn!(pattern, error = %e, "skipping invalid overused pattern"),
        }
    }
    match builder.build() {
        Ok(set) => (set, kept),
        Err(e) => {
            tracing::warn!(error = %e, "overused patterns failed to compile");
            (GlobSet::empty(), Vec::new())
        }
    }
});

/// Flag `word` if it matches an overused pattern.
///
/// At most one finding; the first pattern in table order is reported.
pub fn check_overused(word: &str) -> Vec<FindingKind> {
    let (set, patterns) = &*OVERUSED;
    set.matches(word)
        .first()
        .and_then(|&idx| patterns.get(idx))
        .map(|pattern| FindingKind::Overused {
            word: word.to_string(),
            pattern: (*pattern).to_string(),
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_filler_nouns() {
        let found = check_overused("ruidos");
        assert_eq!(
            found,
            vec![FindingKind::Overused {
                word: "ruidos".into(),
                pattern: "ruido*".into(),
            }]
        );
        assert_eq!(check_overused("cosa").len(), 1);
    }

    #[test]
    fn first_pattern_wins() {
        // "usar" matches both "usar" and "usar*"
        let found = check_overused("usar");
        assert_eq!(found.len(), 1);
        assert!(matches!(&found[0], FindingKind::Overused { pattern, .. } if pattern == "usar"));
    }

    #[test]
    fn anchored_at_both_ends() {
        assert!(check_overused("escosa").is_empty());
        assert!(check_overused("usa").is_empty());
    }

    #[test]
    fn literal_patterns_match_exactly() {
        assert_eq!(check_overused("usó").len(), 1);
        assert!(check_overused("usóse").is_empty());
    }

    #[test]
    fn ordinary_words_pass() {
        assert!(check_overused("murmullo").is_empty());
    }
}
