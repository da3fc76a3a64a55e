use super::kinds::{CodeFence, Frontmatter, Heading, ListItem, Table, TableLine};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block conversion: each line is classified independently
/// without reference to surrounding context. Whether a fact matters (a `---`
/// opening frontmatter, a fence line closing a code block) is up to the builder.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line without its trailing `\r`. Code block bodies use this verbatim.
    pub raw: &'a str,
    /// `raw` with surrounding whitespace removed.
    pub trimmed: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Info string if the line is a code fence (empty for a bare fence).
    pub fence: Option<&'a str>,
    /// Whether the line is a standalone `---`.
    pub is_delimiter: bool,
    /// Row cells or separator if the line starts with a pipe.
    pub table: Option<TableLine>,
    /// Whether the line is an `![[...]]` embed.
    pub is_embed: bool,
}

/// Classifies individual lines for the block conversion phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub const EMBED: &'static str = "![[";

    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = raw.trim();

        LineClass {
            raw,
            trimmed,
            is_blank: trimmed.is_empty(),
            fence: CodeFence::sig(trimmed),
            is_delimiter: Frontmatter::is_delimiter(trimmed),
            table: Table::line(trimmed),
            is_embed: trimmed.starts_with(Self::EMBED),
        }
    }
}

/// The leaf block a non-verbatim line turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind<'a> {
    Heading { level: u8, text: &'a str },
    Rule,
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Blank,
    /// Anything else. Carries the untrimmed line.
    Paragraph(&'a str),
}

/// Picks the leaf kind of a line, first match wins.
///
/// Runs on the line after cross-links were rewritten, so a rewritten link
/// can itself start a heading or list item.
pub fn classify_leaf(line: &str) -> LeafKind<'_> {
    let trimmed = line.trim();

    if let Some((level, text)) = Heading::parse(line) {
        LeafKind::Heading { level, text }
    } else if Frontmatter::is_delimiter(trimmed) {
        LeafKind::Rule
    } else if let Some(text) = ListItem::unordered(trimmed) {
        LeafKind::UnorderedItem(text)
    } else if let Some(text) = ListItem::ordered(trimmed) {
        LeafKind::OrderedItem(text)
    } else if trimmed.is_empty() {
        LeafKind::Blank
    } else {
        LeafKind::Paragraph(line)
    }
}
