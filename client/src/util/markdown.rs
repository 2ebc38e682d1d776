//! Markdown rendering for job requirements.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// True for relative URLs and for `http`, `https` and `mailto` links.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim();
    let scheme_end = trimmed.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if trimmed[i..].starts_with(':') => {
            SAFE_SCHEMES.iter().any(|s| trimmed[..i].eq_ignore_ascii_case(s))
        }
        _ => true,
    }
}

fn safe_dest(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed("#") }
}

/// Render recruiter-authored markdown to HTML.
///
/// Raw HTML blocks and inline tags are emitted as escaped text, never as
/// markup. Link and image targets outside `http`, `https`, `mailto` and
/// relative paths are replaced with `#`.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Link { link_type, dest_url: safe_dest(dest_url), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Image { link_type, dest_url: safe_dest(dest_url), title, id })
        }
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
