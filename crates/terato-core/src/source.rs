//! Word sources.
//!
//! The engine consumes any iterator of [`SourceWord`]s. [`TextSource`] is the
//! one used for files and stdin: plain text or Markdown held in memory.

use camino::Utf8Path;

use crate::markdown;
use crate::report::Page;
use crate::text::{PAGE_BREAK, normalize_token};

/// A normalized token and the page it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWord {
    /// The normalized token. May be empty; the engine drops empty tokens.
    pub token: String,
    /// The page, or `None` when the source has no pagination.
    pub page: Page,
}

impl SourceWord {
    /// Normalize `raw` and pair it with `page`.
    pub fn new(raw: &str, page: Page) -> Self {
        Self {
            token: normalize_token(raw),
            page,
        }
    }
}

/// Whitespace-separated words of an in-memory text.
///
/// Without paging every word has page `None` and form feeds are ordinary
/// whitespace. With paging the text starts on page 1 and each form feed
/// starts the next page.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
    paging: bool,
}

impl TextSource {
    /// A plain-text source.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            paging: false,
        }
    }

    /// A source over Markdown, reduced to its prose first.
    pub fn markdown(text: &str) -> Self {
        Self::new(markdown::strip_to_prose(text))
    }

    /// Pick plain text or Markdown from the file extension.
    ///
    /// `.md` and `.markdown` files are treated as Markdown; everything else,
    /// including stdin (no path), as plain text.
    #[tracing::instrument(skip(text), fields(len = text.len()))]
    pub fn for_path(path: Option<&Utf8Path>, text: &str) -> Self {
        let is_markdown = path
            .and_then(Utf8Path::extension)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"));
        tracing::debug!(is_markdown, "selected text source");
        if is_markdown {
            Self::markdown(text)
        } else {
            Self::new(text)
        }
    }

    /// Turn page tracking on or off.
    #[must_use]
    pub const fn with_paging(mut self, paging: bool) -> Self {
        self.paging = paging;
        self
    }

    /// The words of the text, in order.
    pub fn words(&self) -> impl Iterator<Item = SourceWord> + '_ {
        // Form feeds are whitespace, so splitting on them is harmless without paging.
        let paging = self.paging;
        self.text
            .split(PAGE_BREAK)
            .zip(1u32..)
            .flat_map(move |(chunk, n)| {
                let page = paging.then_some(n);
                chunk
                    .split_whitespace()
                    .map(move |raw| SourceWord::new(raw, page))
            })
    }
}
