//! Markdown input.
//!
//! Manuscripts written in Markdown are reduced to their prose before
//! tokenizing, using pulldown-cmark. Thematic breaks (`---`, `***`) are the
//! usual scene or chapter separators and become page breaks.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::text::PAGE_BREAK;

/// Reduce Markdown to plain prose.
///
/// Drops front matter, code (blocks and inline), headings, image alt text,
/// and raw HTML.
/// Keeps the visible text of links, emphasis, lists, and block quotes.
/// Every thematic break is replaced by a form feed.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_front_matter(text);
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut prose = String::with_capacity(body.len());
    let mut skip_depth: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => prose.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableCell)
                if skip_depth == 0 =>
            {
                prose.push(' ');
            }
            Event::Rule => {
                prose.push(PAGE_BREAK);
                prose.push(' ');
            }
            _ => {}
        }
    }

    prose
}

/// Skip a leading `---` delimited YAML block.
fn strip_front_matter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_open) = trimmed.strip_prefix("---\n") else {
        return text;
    };
    let Some(close) = after_open.find("\n---") else {
        return text;
    };
    let rest = &after_open[close + 4..];
    rest.strip_prefix('\n').unwrap_or(rest)
}
