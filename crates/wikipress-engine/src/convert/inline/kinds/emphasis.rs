use crate::convert::inline::cursor::Cursor;

/// Single-star emphasis (`*italic*`).
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';

    /// Matches `*TEXT*` at the cursor. TEXT is one or more non-star bytes and
    /// neither star may touch another star, so leftover `**` runs never split
    /// into italics. Returns the inner text and the index past the closer.
    pub fn at<'a>(cur: &Cursor<'a>) -> Option<(&'a str, usize)> {
        if cur.peek() != Some(Self::STAR) || cur.prev() == Some(Self::STAR) {
            return None;
        }
        let inner_start = cur.pos() + 1;
        let close = cur.find_from(inner_start, Self::STAR)?;
        if close == inner_start || cur.peek_at(close + 1) == Some(Self::STAR) {
            return None;
        }
        Some((&cur.s[inner_start..close], close + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_star_span() {
        assert_eq!(Emphasis::at(&Cursor::new("*it* x")), Some(("it", 4)));
    }

    #[test]
    fn rejects_star_after_star() {
        let mut cur = Cursor::new("**b*");
        cur.bump();
        assert_eq!(Emphasis::at(&cur), None);
    }

    #[test]
    fn rejects_closer_followed_by_star() {
        assert_eq!(Emphasis::at(&Cursor::new("*a**")), None);
    }

    #[test]
    fn rejects_empty_and_unclosed() {
        assert_eq!(Emphasis::at(&Cursor::new("**")), None);
        assert_eq!(Emphasis::at(&Cursor::new("*open")), None);
    }
}
