/// A run of inline output. All variants hold HTML-safe text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Escaped text that later passes may still rewrite.
    Text(String),
    /// Escaped text no later pass may touch: code span contents and rejected
    /// image syntax.
    Verbatim(String),
    /// Markup emitted by a pass.
    Tag(String),
}

impl InlineNode {
    pub fn as_html(&self) -> &str {
        match self {
            InlineNode::Text(s) | InlineNode::Verbatim(s) | InlineNode::Tag(s) => s,
        }
    }
}
