/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// A quote line starts with `>` in the first column.
    pub fn is_quote(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips exactly one `>` and then at most one space.
    ///
    /// Handles `> text`, `>text` and `>> nested` (leaving `> nested`).
    pub fn strip_prefix(line: &str) -> &str {
        let rest = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}
