/// A byte cursor for scanning inline text.
///
/// Every delimiter the scanners look for is ASCII, so any index the cursor
/// stops on next to a delimiter is a valid `str` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(self.i)
    }

    /// Peeks at the byte at an absolute index.
    pub fn peek_at(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(i).copied()
    }

    /// Peeks at the byte just before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).and_then(|i| self.peek_at(i))
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Index of the next `b` at or after `from`, if any.
    pub fn find_from(&self, from: usize, b: u8) -> Option<usize> {
        let rest = self.s.as_bytes().get(from..)?;
        rest.iter().position(|&x| x == b).map(|off| from + off)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to an absolute byte index.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}

/// Rebuilds `s`, replacing every span a scanner recognises.
///
/// At each position `scan` may return `(end, replacement)` for a construct
/// starting there; the scan then resumes at `end`. Otherwise the cursor moves
/// on by one byte. Text between constructs is copied through unchanged.
pub fn replace_spans(
    s: &str,
    mut scan: impl FnMut(&Cursor<'_>) -> Option<(usize, String)>,
) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;

    while !cur.eof() {
        if let Some((end, replacement)) = scan(&cur) {
            out.push_str(&s[copied..cur.pos()]);
            out.push_str(&replacement);
            cur.jump_to(end);
            copied = end;
            continue;
        }
        cur.bump();
    }

    out.push_str(&s[copied..]);
    out
}
