use std::sync::OnceLock;

use regex::Regex;

use crate::convert::markup;

/// A pipe table line, as seen before any inline processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    /// A content row split into trimmed cells.
    Row(Vec<String>),
    /// The `|---|:--:|` header separator. It carries no content.
    Separator,
}

pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Classifies a trimmed line as a table line, if it starts with a pipe.
    ///
    /// A row whose cells hold nothing but dashes, colons and whitespace is
    /// indistinguishable from a separator and is treated as one.
    pub fn line(trimmed: &str) -> Option<TableLine> {
        if !trimmed.starts_with(Self::PIPE) {
            return None;
        }

        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        let separator = SEPARATOR
            .get_or_init(|| Regex::new(r"^\|[\s\-:|]+\|$").expect("Invalid table separator regex"));
        if separator.is_match(trimmed) {
            return Some(TableLine::Separator);
        }

        Some(TableLine::Row(Self::cells(trimmed)))
    }

    /// Splits a row on pipes, dropping the empty cell before the leading pipe
    /// and the one after a trailing pipe.
    fn cells(trimmed: &str) -> Vec<String> {
        let mut cells: Vec<&str> = trimmed.split(Self::PIPE).skip(1).collect();
        if trimmed.ends_with(Self::PIPE) {
            cells.pop();
        }
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }

    /// Renders accumulated rows: the first row as header cells, the rest as
    /// body cells, each cell's text passed through `cell` first.
    ///
    /// Returns `None` when there are no rows to render.
    pub fn render(rows: &[Vec<String>], mut cell: impl FnMut(&str) -> String) -> Option<String> {
        if rows.is_empty() {
            return None;
        }

        let mut html = String::from("<table><tbody>");
        for (idx, row) in rows.iter().enumerate() {
            let tag = if idx == 0 { "th" } else { "td" };
            html.push_str("<tr>");
            for text in row {
                html.push_str(&markup::element(tag, &cell(text)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        Some(html)
    }
}
