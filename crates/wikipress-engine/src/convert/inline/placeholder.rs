use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::convert::markup::{self, escape};
use crate::links::LinkResolver;

use super::{
    cursor::replace_spans,
    kinds::{CrossLink, Emphasis},
};

/// Private-use characters bracketing a placeholder token. Escaping leaves
/// them alone, and they are removed from the input before extraction so
/// only the registry ever writes them.
const TOKEN_OPEN: char = '\u{E000}';
const TOKEN_CLOSE: char = '\u{E001}';

/// Inline span categories, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Link,
    Code,
    Bold,
    Italic,
}

impl SpanKind {
    fn tag(self) -> char {
        match self {
            Self::Link => 'L',
            Self::Code => 'C',
            Self::Bold => 'B',
            Self::Italic => 'I',
        }
    }

    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'L' => Some(Self::Link),
            'C' => Some(Self::Code),
            'B' => Some(Self::Bold),
            'I' => Some(Self::Italic),
            _ => None,
        }
    }
}

/// One extracted span.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stashed {
    /// Text a code span shows in place of this span.
    source: String,
    /// The content between the delimiters (link text for links).
    inner: String,
    /// Link destination; `None` for other kinds.
    href: Option<String>,
}

/// Bookkeeping for spans lifted out of one text fragment.
///
/// Each category keeps its spans in extraction order; a span's token encodes
/// its category and index. The registry lives for a single
/// [`format_inline`](super::format_inline) call.
#[derive(Debug, Default)]
pub struct PlaceholderRegistry {
    links: Vec<Stashed>,
    codes: Vec<Stashed>,
    bolds: Vec<Stashed>,
    italics: Vec<Stashed>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the extraction passes in order (cross-links, links, code, bold,
    /// italic), returning `text` with every recognised span replaced by its
    /// token.
    ///
    /// Cross-links found in `links` become link spans carrying the resolved
    /// path and title. Any other cross-link is reduced to its key.
    pub fn extract(&mut self, text: &str, links: Option<&LinkResolver>) -> String {
        static LINK: OnceLock<Regex> = OnceLock::new();
        static CODE: OnceLock<Regex> = OnceLock::new();
        static BOLD: OnceLock<Regex> = OnceLock::new();
        let link = LINK
            .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));
        let code = CODE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"));
        let bold =
            BOLD.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"));

        let text = strip_reserved(text);
        let text = replace_spans(&text, |cur| {
            let (key, end) = CrossLink::at(cur)?;
            let replacement = match links.and_then(|l| l.resolve(key).map(|t| (l, t))) {
                Some((resolver, target)) => self.stash(
                    SpanKind::Link,
                    &target.title,
                    &target.title,
                    Some(&resolver.path_for(target)),
                ),
                None => key.to_string(),
            };
            Some((end, replacement))
        });
        let text = link.replace_all(&text, |caps: &Captures<'_>| {
            self.stash(SpanKind::Link, &caps[0], &caps[1], Some(&caps[2]))
        });
        let text = code.replace_all(&text, |caps: &Captures<'_>| {
            self.stash(SpanKind::Code, &caps[0], &caps[1], None)
        });
        let text = bold.replace_all(&text, |caps: &Captures<'_>| {
            self.stash(SpanKind::Bold, &caps[0], &caps[1], None)
        });
        replace_spans(&text, |cur| {
            let (inner, end) = Emphasis::at(cur)?;
            let source = &cur.s[cur.pos()..end];
            Some((end, self.stash(SpanKind::Italic, source, inner, None)))
        })
    }

    /// Replaces every token in `escaped` with its element in one left to
    /// right scan.
    ///
    /// Bold and italic content may hold tokens of earlier categories; those
    /// expand into their elements as well. Link and code content expands them
    /// back to their source text instead, so nothing inside renders as
    /// markup. No token survives restoration.
    pub fn restore(&self, escaped: &str) -> String {
        let mut out = String::with_capacity(escaped.len());
        self.expand_into(escaped, &mut out, |registry, kind, span, out| {
            registry.render_into(kind, span, out)
        });
        out
    }

    /// Number of spans stashed for a category.
    pub fn count(&self, kind: SpanKind) -> usize {
        self.spans(kind).len()
    }

    fn stash(&mut self, kind: SpanKind, source: &str, inner: &str, href: Option<&str>) -> String {
        let spans = self.spans_mut(kind);
        spans.push(Stashed {
            source: source.to_string(),
            inner: inner.to_string(),
            href: href.map(str::to_string),
        });
        token(kind, spans.len() - 1)
    }

    /// Copies `text` into `out`, handing each token's span to `expand`.
    fn expand_into(
        &self,
        text: &str,
        out: &mut String,
        expand: impl Fn(&Self, SpanKind, &Stashed, &mut String),
    ) {
        let mut rest = text;
        while let Some(open) = rest.find(TOKEN_OPEN) {
            out.push_str(&rest[..open]);
            let after = &rest[open + TOKEN_OPEN.len_utf8()..];
            match self.parse_token(after) {
                Some((kind, span, len)) => {
                    expand(self, kind, span, out);
                    rest = &after[len..];
                }
                None => {
                    // Tokens are only written by `stash`; never reached.
                    rest = after;
                }
            }
        }
        out.push_str(rest);
    }

    /// Parses `KIND INDEX CLOSE` at the start of `s`, returning the span and
    /// the bytes consumed.
    fn parse_token(&self, s: &str) -> Option<(SpanKind, &Stashed, usize)> {
        let kind = SpanKind::from_tag(s.chars().next()?)?;
        let close = s.find(TOKEN_CLOSE)?;
        let index: usize = s[1..close].parse().ok()?;
        let span = self.spans(kind).get(index)?;
        Some((kind, span, close + TOKEN_CLOSE.len_utf8()))
    }

    fn render_into(&self, kind: SpanKind, span: &Stashed, out: &mut String) {
        let html = match kind {
            SpanKind::Link => markup::anchor(
                span.href.as_deref().unwrap_or_default(),
                &escape(&self.literal(&span.inner)),
            ),
            SpanKind::Code => markup::element("code", &escape(&self.literal(&span.inner))),
            SpanKind::Bold => markup::element("strong", &self.restore(&escape(&span.inner))),
            SpanKind::Italic => markup::element("em", &self.restore(&escape(&span.inner))),
        };
        out.push_str(&html);
    }

    /// Puts source text back in place of any tokens.
    fn literal(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.expand_into(text, &mut out, |registry, _, span, out| {
            out.push_str(&registry.literal(&span.source))
        });
        out
    }

    fn spans(&self, kind: SpanKind) -> &[Stashed] {
        match kind {
            SpanKind::Link => &self.links,
            SpanKind::Code => &self.codes,
            SpanKind::Bold => &self.bolds,
            SpanKind::Italic => &self.italics,
        }
    }

    fn spans_mut(&mut self, kind: SpanKind) -> &mut Vec<Stashed> {
        match kind {
            SpanKind::Link => &mut self.links,
            SpanKind::Code => &mut self.codes,
            SpanKind::Bold => &mut self.bolds,
            SpanKind::Italic => &mut self.italics,
        }
    }
}

fn token(kind: SpanKind, index: usize) -> String {
    format!("{TOKEN_OPEN}{}{index}{TOKEN_CLOSE}", kind.tag())
}

/// Drops the token delimiters from source text.
fn strip_reserved(text: &str) -> Cow<'_, str> {
    if has_tokens(text) {
        Cow::Owned(text.replace([TOKEN_OPEN, TOKEN_CLOSE], ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Whether any placeholder token is left in `text`.
pub fn has_tokens(text: &str) -> bool {
    text.contains(TOKEN_OPEN) || text.contains(TOKEN_CLOSE)
}
