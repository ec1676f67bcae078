/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no later pass runs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const OPEN_TAG: &'static str = "<code>";
    pub const CLOSE_TAG: &'static str = "</code>";
}
