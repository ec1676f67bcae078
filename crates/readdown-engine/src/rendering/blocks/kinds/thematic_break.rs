/// Horizontal rule type with owned marker constants.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;

    /// A rule is three or more of one marker character, with any whitespace
    /// between and around them and nothing else.
    pub fn is_rule(line: &str) -> bool {
        let mut markers = line.chars().filter(|c| !c.is_whitespace());
        let Some(first) = markers.next() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for c in markers {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_MARKERS
    }
}
