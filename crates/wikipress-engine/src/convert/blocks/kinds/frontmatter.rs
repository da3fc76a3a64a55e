/// YAML frontmatter fenced by standalone `---` lines at the top of a document.
///
/// The same delimiter doubles as a horizontal rule everywhere else.
pub struct Frontmatter;

impl Frontmatter {
    pub const DELIMITER: &'static str = "---";

    pub fn is_delimiter(trimmed: &str) -> bool {
        trimmed == Self::DELIMITER
    }

    /// Whether a delimiter at `index` opens frontmatter: it must sit inside the
    /// window and nothing but blank lines may come before it.
    pub fn opens_at(index: usize, window: usize, seen_content: bool) -> bool {
        !seen_content && index < window
    }
}
