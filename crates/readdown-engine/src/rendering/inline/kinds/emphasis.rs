/// Emphasis inline types with owned delimiter constants.
///
/// Each delimiter pair wraps at least one character on a single line.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG_EMPHASIS: [&'static str; 2] = ["***", "___"];
    pub const STRONG: [&'static str; 2] = ["**", "__"];
    pub const EMPHASIS: [&'static str; 2] = ["*", "_"];
}

pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static str = "~~";
}
