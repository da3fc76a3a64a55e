pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string when `trimmed` is a fence line.
    ///
    /// The info string is whatever follows the marker, trimmed; it may be empty.
    pub fn sig(trimmed: &str) -> Option<&str> {
        trimmed
            .strip_prefix(Self::BACKTICKS)
            .map(|info| info.trim())
    }

    /// Language for an opening fence, falling back to `default` when unnamed.
    pub fn language<'a>(info: &'a str, default: &'a str) -> &'a str {
        if info.is_empty() { default } else { info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some("rust"));
    }

    #[test]
    fn bare_fence_has_empty_info() {
        assert_eq!(CodeFence::sig("```"), Some(""));
    }

    #[test]
    fn info_string_is_trimmed() {
        assert_eq!(CodeFence::sig("``` python "), Some("python"));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``inline``"), None);
    }

    #[test]
    fn tildes_are_not_fences() {
        assert_eq!(CodeFence::sig("~~~"), None);
    }

    #[test]
    fn language_defaults_when_unnamed() {
        assert_eq!(CodeFence::language("", "text"), "text");
        assert_eq!(CodeFence::language("sql", "text"), "sql");
    }
}
