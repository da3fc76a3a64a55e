//! # Inline Formatting
//!
//! Turns the text of one heading, list item, paragraph or table cell into
//! storage markup.
//!
//! ## Architecture
//!
//! Formatting is extract → escape → restore:
//! - Cross-links, links, code spans, bold and italic spans are lifted out (in
//!   that order) and replaced with placeholder tokens held by a
//!   `PlaceholderRegistry`
//! - The remaining prose is HTML-escaped
//! - Tokens are swapped back for their elements, content escaped separately
//!
//! Links go first so asterisks or backticks inside a URL or link text are
//! never taken for emphasis or code. A resolved cross-link goes straight into
//! the registry as a link span, so its title is never parsed as Markdown.
//!
//! Before block classification, unresolved cross-links on the whole line are
//! reduced to their key, see [`rewrite_cross_links`].
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` and `replace_spans` for byte-level scanning
//! - **`kinds`**: Scanners that own their delimiters (CrossLink, Emphasis)
//! - **`placeholder`**: `PlaceholderRegistry` extraction and restoration

pub mod cursor;
pub mod kinds;
pub mod placeholder;

use std::borrow::Cow;

use crate::links::LinkResolver;

use cursor::replace_spans;
use kinds::CrossLink;
use placeholder::PlaceholderRegistry;

use super::markup::escape;

/// Formats one fragment of inline text as storage markup.
///
/// `[[Key]]` cross-links known to `links` become links to the resolved page
/// showing its title; any other cross-link keeps only `Key`.
pub fn format_inline(text: &str, links: Option<&LinkResolver>) -> String {
    let mut registry = PlaceholderRegistry::new();
    let extracted = registry.extract(text, links);
    registry.restore(&escape(&extracted))
}

/// Reduces every `[[Key]]` in `line` that `links` cannot resolve to `Key`.
///
/// Resolved cross-links are left in place for [`format_inline`]. Block
/// classification runs on the result, so an unresolved key can itself start
/// a heading or list item.
pub fn rewrite_cross_links<'a>(line: &'a str, links: Option<&LinkResolver>) -> Cow<'a, str> {
    if !line.contains("[[") {
        return Cow::Borrowed(line);
    }

    Cow::Owned(replace_spans(line, |cur| {
        let (key, end) = CrossLink::at(cur)?;
        let kept = match links.and_then(|l| l.resolve(key)) {
            Some(_) => &cur.s[cur.pos()..end],
            None => key,
        };
        Some((end, kept.to_string()))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_escaped() {
        assert_eq!(format_inline("a < b & c > d", None), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn bold_italic_code_in_order() {
        assert_eq!(
            format_inline("**bold** and *italic* and `code`", None),
            "<strong>bold</strong> and <em>italic</em> and <code>code</code>"
        );
    }

    #[test]
    fn link_with_special_characters() {
        assert_eq!(
            format_inline("see [a*b*](https://x.test/?q=1&r=*2*)", None),
            r#"see <a href="https://x.test/?q=1&amp;r=*2*">a*b*</a>"#
        );
    }

    #[test]
    fn code_span_content_is_escaped_not_formatted() {
        assert_eq!(
            format_inline("`<div>**x**</div>`", None),
            "<code>&lt;div&gt;**x**&lt;/div&gt;</code>"
        );
    }

    #[test]
    fn bold_wrapping_code() {
        assert_eq!(
            format_inline("**use `cargo`**", None),
            "<strong>use <code>cargo</code></strong>"
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(format_inline("2 * 3 and `tick", None), "2 * 3 and `tick");
    }

    #[test]
    fn cross_link_without_resolver_keeps_text() {
        assert_eq!(rewrite_cross_links("See [[Home]] now", None), "See Home now");
    }

    #[test]
    fn resolved_cross_link_is_left_for_formatting() {
        let links = LinkResolver::new("TEAM").with_link("Home", "42", "Home Page");
        assert_eq!(rewrite_cross_links("See [[Home]]", Some(&links)), "See [[Home]]");
    }

    #[test]
    fn unknown_cross_link_with_resolver_keeps_text() {
        let links = LinkResolver::new("TEAM").with_link("Home", "42", "Home Page");
        assert_eq!(
            rewrite_cross_links("[[Elsewhere]] and [[Home]]", Some(&links)),
            "Elsewhere and [[Home]]"
        );
    }

    #[test]
    fn resolved_cross_link_formats_as_link() {
        let links = LinkResolver::new("TEAM").with_link("Home", "42", "Home Page");
        assert_eq!(
            format_inline("See [[Home]] and [[Away]]", Some(&links)),
            r#"See <a href="/wiki/spaces/TEAM/pages/42">Home Page</a> and Away"#
        );
    }

    #[test]
    fn title_with_brackets_is_escaped_link_text() {
        let links = LinkResolver::new("T").with_link("Q", "1", "Q&A [draft]");
        assert_eq!(
            format_inline("[[Q]]", Some(&links)),
            r#"<a href="/wiki/spaces/T/pages/1">Q&amp;A [draft]</a>"#
        );
    }

    #[test]
    fn empty_title_still_links() {
        let links = LinkResolver::new("T").with_link("Q", "1", "");
        assert_eq!(
            format_inline("[[Q]]", Some(&links)),
            r#"<a href="/wiki/spaces/T/pages/1"></a>"#
        );
    }

    #[test]
    fn title_with_markup_characters_is_not_formatted() {
        let links = LinkResolver::new("T").with_link("S", "2", "**not bold** `x`");
        assert_eq!(
            format_inline("[[S]]", Some(&links)),
            r#"<a href="/wiki/spaces/T/pages/2">**not bold** `x`</a>"#
        );
    }

    #[test]
    fn line_without_cross_links_is_borrowed() {
        assert!(matches!(
            rewrite_cross_links("nothing here", None),
            Cow::Borrowed(_)
        ));
    }
}
