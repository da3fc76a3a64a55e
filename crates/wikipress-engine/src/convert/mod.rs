//! # Markdown to Storage Markup
//!
//! Single forward pass over the source lines, in two phases per line:
//!
//! 1. **Line Classification** (`blocks::classify`): each line is reduced to a
//!    `LineClass` of local facts (fence opener, table row, `---` delimiter,
//!    embed, blank).
//!
//! 2. **Block Construction** (`blocks::builder`): a `StorageBuilder` state
//!    machine (`Normal`, `Frontmatter`, `Code`, `Table`) consumes the facts,
//!    accumulates multi-line blocks and emits storage markup as blocks close.
//!    End of input runs the same flush as an explicit close.
//!
//! Inline text (headings, list items, paragraphs, table cells) goes through
//! `inline::format_inline`, which protects spans behind placeholders while the
//! surrounding prose is escaped.
//!
//! ## Key Invariants
//!
//! - Code block bodies are raw zones: no escaping, no inline formatting
//! - An open code block or table is never dropped at end of input
//! - Conversion never fails; unknown constructs become paragraphs

pub mod blocks;
pub mod inline;
pub mod markup;

use crate::links::LinkResolver;

use blocks::{MarkdownLineClassifier, StorageBuilder};

/// Knobs for a conversion. `Default` matches [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Cross-link table and namespace. `None` strips cross-links to their text.
    pub links: Option<LinkResolver>,
    /// Language used for fences that do not name one.
    pub code_language: String,
    /// How many leading lines may open a frontmatter block.
    pub frontmatter_window: usize,
}

impl ConvertOptions {
    pub const DEFAULT_CODE_LANGUAGE: &'static str = "text";
    pub const DEFAULT_FRONTMATTER_WINDOW: usize = 5;

    #[must_use]
    pub fn with_links(mut self, links: LinkResolver) -> Self {
        self.links = Some(links);
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            links: None,
            code_language: Self::DEFAULT_CODE_LANGUAGE.to_string(),
            frontmatter_window: Self::DEFAULT_FRONTMATTER_WINDOW,
        }
    }
}

/// Converts Markdown to storage markup.
///
/// With `links`, `[[Key]]` cross-links found in the table become links to the
/// resolved page; everything else keeps only the bracketed text.
pub fn convert(source: &str, links: Option<&LinkResolver>) -> String {
    run(
        source,
        StorageBuilder::new(
            links,
            ConvertOptions::DEFAULT_CODE_LANGUAGE,
            ConvertOptions::DEFAULT_FRONTMATTER_WINDOW,
        ),
    )
}

pub fn convert_with_options(source: &str, options: &ConvertOptions) -> String {
    run(
        source,
        StorageBuilder::new(
            options.links.as_ref(),
            &options.code_language,
            options.frontmatter_window,
        ),
    )
}

fn run(source: &str, mut builder: StorageBuilder<'_>) -> String {
    let classifier = MarkdownLineClassifier;

    for (index, line) in source.split('\n').enumerate() {
        let lc = classifier.classify(line);
        builder.push(index, &lc);
    }

    builder.finish().join("\n")
}
