//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CrossLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`
//! - **`Emphasis`**: `STAR = b'*'` for single-star italic spans
//!
//! Links, code spans and bold spans are matched with regexes held in
//! `placeholder`; the scanners here cover what a regex without lookaround
//! cannot express directly.

pub mod cross_link;
pub mod emphasis;

pub use cross_link::CrossLink;
pub use emphasis::Emphasis;
