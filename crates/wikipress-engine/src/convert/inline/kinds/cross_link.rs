use crate::convert::inline::cursor::Cursor;

pub struct CrossLink;

impl CrossLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";

    /// Matches `[[KEY]]` at the cursor, where KEY is one or more characters
    /// other than `]`. Returns the key and the index just past the closer.
    pub fn at<'a>(cur: &Cursor<'a>) -> Option<(&'a str, usize)> {
        if !cur.starts_with(Self::OPEN) {
            return None;
        }
        let key_start = cur.pos() + Self::OPEN.len();
        let key_end = cur.find_from(key_start, Self::CLOSE[0])?;
        if key_end == key_start || cur.peek_at(key_end + 1) != Some(Self::CLOSE[1]) {
            return None;
        }
        Some((&cur.s[key_start..key_end], key_end + Self::CLOSE.len()))
    }
}
