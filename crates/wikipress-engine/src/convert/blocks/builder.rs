use crate::convert::{
    inline::{format_inline, rewrite_cross_links},
    markup,
};
use crate::links::LinkResolver;

use super::{
    classify::{LeafKind, LineClass, classify_leaf},
    kinds::{CodeFence, Frontmatter, Table, TableLine},
};

#[derive(Debug)]
enum Mode {
    Normal,
    Frontmatter,
    Code { language: String, lines: Vec<String> },
    Table { rows: Vec<Vec<String>> },
}

/// State machine that turns classified lines into storage markup blocks.
///
/// Code blocks and tables accumulate inside their mode and are flushed by one
/// routine each, whether the block closes on a line or at end of input.
pub struct StorageBuilder<'a> {
    links: Option<&'a LinkResolver>,
    code_language: &'a str,
    frontmatter_window: usize,
    mode: Mode,
    seen_content: bool,
    out: Vec<String>,
}

impl<'a> StorageBuilder<'a> {
    pub fn new(
        links: Option<&'a LinkResolver>,
        code_language: &'a str,
        frontmatter_window: usize,
    ) -> Self {
        Self {
            links,
            code_language,
            frontmatter_window,
            mode: Mode::Normal,
            seen_content: false,
            out: vec![],
        }
    }

    /// Feeds the line at `index` (zero-based) into the builder.
    pub fn push(&mut self, index: usize, c: &LineClass<'_>) {
        match &mut self.mode {
            Mode::Frontmatter => {
                if c.is_delimiter {
                    self.mode = Mode::Normal;
                }
                return;
            }
            Mode::Code { lines, .. } => {
                if c.fence.is_some() {
                    self.flush_code();
                } else {
                    lines.push(c.raw.to_string());
                }
                return;
            }
            Mode::Normal | Mode::Table { .. } => {}
        }

        if c.is_delimiter && Frontmatter::opens_at(index, self.frontmatter_window, self.seen_content)
        {
            log::debug!("Skipping frontmatter opened on line {}", index + 1);
            self.seen_content = true;
            self.mode = Mode::Frontmatter;
            return;
        }
        if !c.is_blank {
            self.seen_content = true;
        }

        if let Some(info) = c.fence {
            self.flush_table();
            self.mode = Mode::Code {
                language: CodeFence::language(info, self.code_language).to_string(),
                lines: vec![],
            };
            return;
        }

        if let Some(line) = &c.table {
            self.extend_table(line);
            return;
        }
        self.flush_table();

        if c.is_embed {
            return;
        }

        let line = rewrite_cross_links(c.raw, self.links);
        if let Some(block) = self.render_leaf(classify_leaf(&line)) {
            self.out.push(block);
        }
    }

    /// Flushes whatever is still open and returns the emitted blocks.
    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        match &self.mode {
            Mode::Frontmatter => log::debug!("Unterminated frontmatter discarded at end of input"),
            Mode::Code { lines, .. } => log::debug!(
                "Flushing unterminated code block ({} lines) at end of input",
                lines.len()
            ),
            Mode::Table { rows } => {
                log::trace!("Flushing table ({} rows) at end of input", rows.len())
            }
            Mode::Normal => {}
        }
        self.flush_table();
        self.flush_code();
        self.out
    }

    fn extend_table(&mut self, line: &TableLine) {
        if !matches!(self.mode, Mode::Table { .. }) {
            self.mode = Mode::Table { rows: vec![] };
        }
        if let (Mode::Table { rows }, TableLine::Row(cells)) = (&mut self.mode, line) {
            rows.push(cells.clone());
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.mode, Mode::Normal);
        if let Mode::Table { rows } = prev {
            let links = self.links;
            if let Some(table) = Table::render(&rows, |cell| format_inline(cell, links)) {
                self.out.push(table);
            }
        } else {
            self.mode = prev; // put back non-table mode (e.g. code)
        }
    }

    fn flush_code(&mut self) {
        let prev = std::mem::replace(&mut self.mode, Mode::Normal);
        if let Mode::Code { language, lines } = prev {
            self.out.push(markup::code_macro(&language, &lines.join("\n")));
        } else {
            self.mode = prev;
        }
    }

    fn render_leaf(&self, leaf: LeafKind<'_>) -> Option<String> {
        let inline = |text: &str| format_inline(text, self.links);
        match leaf {
            LeafKind::Heading { level, text } => Some(markup::heading(level, &inline(text))),
            LeafKind::Rule => Some(markup::rule()),
            LeafKind::UnorderedItem(text) => Some(markup::single_item_list(false, &inline(text))),
            LeafKind::OrderedItem(text) => Some(markup::single_item_list(true, &inline(text))),
            LeafKind::Blank => None,
            LeafKind::Paragraph(text) => {
                let html = inline(text);
                (!html.trim().is_empty()).then(|| markup::paragraph(&html))
            }
        }
    }
}
