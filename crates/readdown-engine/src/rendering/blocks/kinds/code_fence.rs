/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// A fence opens or closes a code block only at the very start of a line.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// The info string of an opening fence, trimmed; `None` when empty.
    pub fn language(opener: &str) -> Option<&str> {
        let lang = opener.strip_prefix(Self::BACKTICKS)?.trim();
        (!lang.is_empty()).then_some(lang)
    }
}
