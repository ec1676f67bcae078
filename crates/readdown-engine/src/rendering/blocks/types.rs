/// A parsed block. Text fields borrow from the source document and are raw:
/// escaping and inline rendering happen at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `# text` through `###### text`.
    Heading {
        /// Always within 1..=6.
        level: u8,
        /// Marker and surrounding whitespace removed.
        text: &'a str,
    },
    /// Contiguous plain lines, rendered as one inline run joined by `\n`.
    Paragraph { lines: Vec<&'a str> },
    /// A fenced code block (```` ``` ````).
    CodeBlock {
        /// Info string after the opening fence, if non-empty.
        language: Option<&'a str>,
        /// Lines between the fences, verbatim.
        lines: Vec<&'a str>,
    },
    /// `---`, `***`, `___` and spaced variants.
    ThematicBreak,
    /// Quoted content, itself a full document.
    BlockQuote(Vec<Block<'a>>),
    /// `-`, `*` or `+` items.
    UnorderedList {
        items: Vec<ListItem<'a>>,
        /// Set when any item carries a checkbox.
        is_task_list: bool,
    },
    /// `1.` style items.
    OrderedList { items: Vec<ListItem<'a>> },
    /// A pipe table.
    Table(Table<'a>),
}

/// One list item: its marker line plus any continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Text after the marker (and after the checkbox for task items).
    pub text: &'a str,
    /// Following lines folded into this item, trimmed. Rendered after `<br>`s.
    pub continuation: Vec<&'a str>,
    pub task: TaskState,
}

/// Checkbox state of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    /// A plain item.
    #[default]
    None,
    /// `[ ] `
    Unchecked,
    /// `[x] ` or `[X] `
    Checked,
}

impl TaskState {
    #[must_use]
    pub fn is_task(self) -> bool {
        !matches!(self, TaskState::None)
    }
}

/// Column alignment derived from a table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Value of the `align` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// A pipe table. Cells are raw and untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    pub header: Vec<&'a str>,
    /// One entry per separator cell; may be shorter than `header`.
    pub alignments: Vec<Alignment>,
    /// Every row has exactly `header.len()` cells.
    pub rows: Vec<Vec<&'a str>>,
}

impl Table<'_> {
    /// Alignment of a column, `Left` when the separator row had no cell for it.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }
}
