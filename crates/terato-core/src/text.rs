//! Text processing utilities.
//!
//! Turns raw prose into the normalized tokens every check works on: the
//! original word lowercased with all non-alphanumeric characters removed.

/// Form feed, the page separator understood by [`crate::source::TextSource`].
pub const PAGE_BREAK: char = '\u{0c}';

/// Normalize a raw word into a token.
///
/// Lowercases the word and drops every character that is not alphanumeric.
/// Accented letters and `ñ` are alphanumeric and survive. The result may be
/// empty (pure punctuation, dashes, quotes), in which case the caller should
/// drop it.
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Number of characters (not bytes) in a token.
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}
