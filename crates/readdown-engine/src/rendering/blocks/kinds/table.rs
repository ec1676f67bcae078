use crate::rendering::blocks::types::Alignment;

/// Pipe table row type with owned delimiter constants.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    pub const ALIGN: char = ':';
    pub const DASH: char = '-';

    /// Whether a line can be a header or body row.
    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Splits a row into raw cells.
    ///
    /// Surrounding whitespace, then one optional leading and one optional
    /// trailing `|`, are removed before splitting. Cells are not trimmed.
    pub fn split(line: &str) -> Vec<&str> {
        let row = line.trim();
        let row = row.strip_prefix(Self::PIPE).unwrap_or(row);
        let row = row.strip_suffix(Self::PIPE).unwrap_or(row);
        row.split(Self::PIPE).collect()
    }

    /// Whether a line is a separator row such as `|:--|--:|` or `--- | :-:`.
    ///
    /// The line must contain at least one `|`, so a lone `---` stays a rule.
    /// Every cell must be an optional `:`, one or more `-`, an optional `:`,
    /// with optional whitespace around it.
    pub fn is_separator(line: &str) -> bool {
        Self::has_pipe(line)
            && Self::split(line)
                .into_iter()
                .all(|cell| Self::is_separator_cell(cell.trim()))
    }

    /// Alignment from one separator cell: `:-:` center, `-:` right, else left.
    pub fn alignment(cell: &str) -> Alignment {
        let cell = cell.trim();
        match (cell.starts_with(Self::ALIGN), cell.ends_with(Self::ALIGN)) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        }
    }

    fn is_separator_cell(cell: &str) -> bool {
        let dashes = cell.strip_prefix(Self::ALIGN).unwrap_or(cell);
        let dashes = dashes.strip_suffix(Self::ALIGN).unwrap_or(dashes);
        !dashes.is_empty() && dashes.chars().all(|c| c == Self::DASH)
    }
}
