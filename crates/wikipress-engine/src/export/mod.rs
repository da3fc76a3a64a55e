//! # Page Export
//!
//! The reverse direction: storage markup pulled from the wiki rendered as
//! Markdown or plain text. These are best-effort tag rewrites, not a markup
//! parser; anything without a Markdown counterpart is dropped to its text.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Representation requested when reading a page's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    #[default]
    Html,
    Text,
    Storage,
}

impl ContentFormat {
    /// Parses a format name. Unknown names fall back to `Html`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "storage" => Self::Storage,
            _ => Self::Html,
        }
    }

    /// Renders stored page content in this format.
    pub fn render(self, storage: &str) -> String {
        match self {
            Self::Text => strip_markup(storage),
            Self::Html | Self::Storage => storage.to_string(),
        }
    }
}

impl From<&str> for ContentFormat {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Reduces storage markup to plain text: tags become spaces, entities are
/// decoded and whitespace runs collapse to one space.
pub fn strip_markup(storage: &str) -> String {
    let text = tag_regex().replace_all(storage, " ");
    let text = html_escape::decode_html_entities(&text);

    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace =
        WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
    whitespace.replace_all(&text, " ").trim().to_string()
}

/// Converts storage markup to Markdown.
///
/// Code macros are lifted out first and restored as fenced blocks at the end,
/// so their bodies survive tag stripping and entity decoding untouched.
pub fn storage_to_markdown(storage: &str) -> String {
    let (mut text, code_blocks) = lift_code_macros(storage);

    for (pattern, replacement) in tag_rewrites() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text = tag_regex().replace_all(&text, "").into_owned();
    text = html_escape::decode_html_entities(&text).into_owned();

    static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();
    let blank_runs = BLANK_RUNS.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));
    text = blank_runs.replace_all(&text, "\n\n").into_owned();

    restore_code_blocks(text, &code_blocks)
}

/// A page ready to be written out as a Markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExport {
    pub title: String,
    /// Space key, or the space id when the key is unknown.
    pub space: String,
    /// Last update timestamp as reported by the wiki.
    pub updated: Option<String>,
    /// Page body in storage markup.
    pub content: String,
}

impl PageExport {
    /// Markdown document: title heading, a quoted metadata header, a rule,
    /// then the converted body.
    pub fn to_markdown(&self) -> String {
        format!(
            "# {}\n\n> Space: {}\n> Last updated: {}\n\n---\n\n{}",
            self.title,
            self.space,
            self.updated.as_deref().unwrap_or("Unknown"),
            storage_to_markdown(&self.content)
        )
    }

    pub fn file_name(&self) -> String {
        export_file_name(&self.title)
    }
}

/// File name for an exported page: anything other than word characters, `-`
/// and `_` becomes `_`.
pub fn export_file_name(title: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars =
        UNSAFE.get_or_init(|| Regex::new(r"[^\w\-]").expect("Invalid file name regex"));
    format!("{}.md", unsafe_chars.replace_all(title, "_"))
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"))
}

fn tag_rewrites() -> &'static [(Regex, &'static str)] {
    static REWRITES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    REWRITES.get_or_init(|| {
        [
            (r"<h1[^>]*>(.*?)</h1>", "# ${1}\n"),
            (r"<h2[^>]*>(.*?)</h2>", "## ${1}\n"),
            (r"<h3[^>]*>(.*?)</h3>", "### ${1}\n"),
            (r"<h4[^>]*>(.*?)</h4>", "#### ${1}\n"),
            (r"<h5[^>]*>(.*?)</h5>", "##### ${1}\n"),
            (r"<h6[^>]*>(.*?)</h6>", "###### ${1}\n"),
            (r"<strong>(.*?)</strong>", "**${1}**"),
            (r"<b>(.*?)</b>", "**${1}**"),
            (r"<em>(.*?)</em>", "*${1}*"),
            (r"<i>(.*?)</i>", "*${1}*"),
            (r"<code>(.*?)</code>", "`${1}`"),
            (r"<li>(.*?)</li>", "- ${1}\n"),
            (r"<br\s*/?>", "\n"),
            (r"<hr\s*/?>", "\n---\n"),
            (r"(?s)<p>(.*?)</p>", "${1}\n\n"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| {
            (Regex::new(pattern).expect("Invalid tag rewrite regex"), replacement)
        })
        .collect()
    })
}

const CODE_BLOCK_OPEN: char = '\u{E002}';
const CODE_BLOCK_CLOSE: char = '\u{E003}';

/// Replaces each code macro with a placeholder, returning the rendered fenced
/// blocks in order.
fn lift_code_macros(storage: &str) -> (String, Vec<String>) {
    static CODE_MACRO: OnceLock<Regex> = OnceLock::new();
    let code_macro = CODE_MACRO.get_or_init(|| {
        Regex::new(concat!(
            r#"(?s)<ac:structured-macro ac:name="code"[^>]*>"#,
            r#"(?:\s*<ac:parameter ac:name="language">(.*?)</ac:parameter>)?"#,
            r"\s*<ac:plain-text-body><!\[CDATA\[(.*?)\]\]></ac:plain-text-body>",
            r"\s*</ac:structured-macro>",
        ))
        .expect("Invalid code macro regex")
    });

    let mut blocks = vec![];
    let text = code_macro.replace_all(storage, |caps: &Captures<'_>| {
        let language = caps.get(1).map_or("", |m| m.as_str());
        let body = caps[2].replace("]]]]><![CDATA[>", "]]>");
        blocks.push(format!("```{language}\n{body}\n```\n"));
        format!("\n{CODE_BLOCK_OPEN}{}{CODE_BLOCK_CLOSE}\n", blocks.len() - 1)
    });
    (text.into_owned(), blocks)
}

fn restore_code_blocks(mut text: String, blocks: &[String]) -> String {
    for (index, block) in blocks.iter().enumerate() {
        text = text.replace(&format!("{CODE_BLOCK_OPEN}{index}{CODE_BLOCK_CLOSE}"), block);
    }
    text
}
