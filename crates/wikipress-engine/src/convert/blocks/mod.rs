//! # Block Conversion
//!
//! ## Modules
//!
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` of local facts
//!   per line, and `classify_leaf` picks the leaf kind of a non-verbatim line
//! - **`kinds`**: Block-specific types that own their delimiters (CodeFence,
//!   Frontmatter, Heading, ListItem, Table)
//! - **`builder`**: `StorageBuilder` state machine that accumulates and flushes blocks
//!
//! ## Classification Order
//!
//! Frontmatter and code blocks consume lines before anything else is looked
//! at. Outside them: fence opener, table line, embed, then cross-links are
//! rewritten and the leaf kind is chosen (headings 6 down to 1, rule,
//! unordered item, ordered item, blank, paragraph).

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::StorageBuilder;
pub use classify::{LeafKind, LineClass, MarkdownLineClassifier, classify_leaf};
