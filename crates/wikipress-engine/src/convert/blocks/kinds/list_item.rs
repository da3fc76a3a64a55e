use std::sync::OnceLock;

use regex::Regex;

/// Single-line list items. Nesting and continuation lines are not supported.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Text of an unordered item (`- x` or `* x`), given the trimmed line.
    pub fn unordered(trimmed: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|bullet| trimmed.strip_prefix(bullet))
    }

    /// Text of an ordered item (`12. x`), given the trimmed line.
    pub fn ordered(trimmed: &str) -> Option<&str> {
        static ORDINAL: OnceLock<Regex> = OnceLock::new();
        let ordinal =
            ORDINAL.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid ordinal regex"));
        ordinal.find(trimmed).map(|m| &trimmed[m.end()..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_markers() {
        assert_eq!(ListItem::unordered("- item"), Some("item"));
        assert_eq!(ListItem::unordered("* item"), Some("item"));
        assert_eq!(ListItem::unordered("-item"), None);
        assert_eq!(ListItem::unordered("+ item"), None);
    }

    #[test]
    fn ordered_markers() {
        assert_eq!(ListItem::ordered("1. first"), Some("first"));
        assert_eq!(ListItem::ordered("10.\tth"), Some("th"));
        assert_eq!(ListItem::ordered("1.first"), None);
        assert_eq!(ListItem::ordered("a. first"), None);
    }
}
