/// ATX heading type with owned marker constant.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The level is the number of leading `#`, clamped to [`Self::MAX_LEVEL`].
    /// Exactly `level` markers are removed, so surplus markers stay in the text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        if !line.starts_with(Self::MARKER) {
            return None;
        }
        let markers = line.chars().take_while(|&c| c == Self::MARKER).count();
        let level = markers.min(usize::from(Self::MAX_LEVEL));
        // `#` is one byte, so `level` is also a byte offset.
        let text = line[level..].trim();
        Some((level as u8, text))
    }
}
