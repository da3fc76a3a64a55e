pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Splits an ATX-style heading into its level and trimmed text.
    ///
    /// The marker must start the line. Runs longer than six markers stay at
    /// level six and the extra markers become part of the text. No space is
    /// required after the run.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let run = line
            .chars()
            .take_while(|&c| c == Self::MARKER)
            .take(Self::MAX_LEVEL as usize)
            .count();
        if run == 0 {
            return None;
        }
        // The marker is ASCII, so the run length is also its byte length.
        Some((run as u8, line[run..].trim()))
    }
}
