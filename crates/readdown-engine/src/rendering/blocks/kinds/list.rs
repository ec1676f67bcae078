use crate::rendering::blocks::types::TaskState;

/// List marker type with owned delimiter constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+` followed by a space.
    Bullet,
    /// Digits, `.`, space.
    Ordered,
}

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIMITER: char = '.';
    pub const UNCHECKED: &'static str = "[ ] ";
    pub const CHECKED: [&'static str; 2] = ["[x] ", "[X] "];

    /// Recognises a list marker after optional indentation and returns the
    /// marker kind with the item text that follows the marker's space.
    pub fn parse(line: &str) -> Option<(ListMarker, &str)> {
        let rest = line.trim_start();

        let mut chars = rest.chars();
        if let Some(c) = chars.next()
            && Self::BULLETS.contains(&c)
        {
            return chars
                .as_str()
                .strip_prefix(' ')
                .map(|text| (ListMarker::Bullet, text));
        }

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        rest[digits..]
            .strip_prefix(Self::ORDERED_DELIMITER)
            .and_then(|r| r.strip_prefix(' '))
            .map(|text| (ListMarker::Ordered, text))
    }

    /// Splits a leading checkbox off a bullet item's text.
    pub fn task(text: &str) -> (TaskState, &str) {
        if let Some(rest) = text.strip_prefix(Self::UNCHECKED) {
            return (TaskState::Unchecked, rest);
        }
        for checked in Self::CHECKED {
            if let Some(rest) = text.strip_prefix(checked) {
                return (TaskState::Checked, rest);
            }
        }
        (TaskState::None, text)
    }
}
