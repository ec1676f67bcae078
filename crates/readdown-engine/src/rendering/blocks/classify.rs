use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, TableRow, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently, without reference to its
/// neighbours. Lookahead (tables) is the scanner's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Whether the line opens or closes a fenced code block.
    pub is_fence: bool,
    /// Whether the line is a horizontal rule.
    pub is_rule: bool,
    /// Heading level and text if the line starts with `#`.
    pub heading: Option<(u8, &'a str)>,
    /// Whether the line starts with `>`.
    pub is_quote: bool,
    /// List marker and the item text after it.
    pub list: Option<(ListMarker, &'a str)>,
    /// Whether the line contains a `|` and so may be a table row.
    pub has_pipe: bool,
}

impl LineClass<'_> {
    /// Whether this line ends a paragraph that is already under way.
    ///
    /// `quotes_open` is false once the quote depth limit is reached; from then
    /// on `>` lines are ordinary text. Table openers need lookahead and are
    /// checked by the scanner.
    pub fn interrupts_paragraph(&self, quotes_open: bool) -> bool {
        self.is_blank
            || self.is_fence
            || self.is_rule
            || self.heading.is_some()
            || (self.is_quote && quotes_open)
            || self.list.is_some()
    }

    /// Whether this line ends a list item instead of continuing it.
    pub fn ends_list_item(&self) -> bool {
        self.is_blank
            || self.is_fence
            || self.heading.is_some()
            || self.is_quote
            || self.list.is_some()
    }
}

/// Classifies individual lines for the block scanning phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let is_blank = line.trim().is_empty();

        LineClass {
            is_blank,
            is_fence: CodeFence::is_fence(line),
            is_rule: !is_blank && ThematicBreak::is_rule(line),
            heading: Heading::parse(line),
            is_quote: BlockQuote::is_quote(line),
            list: ListMarker::parse(line),
            has_pipe: TableRow::has_pipe(line),
        }
    }
}
