use crate::rendering::{MAX_QUOTE_DEPTH, RenderOptions};

use super::{
    classify::MarkdownLineClassifier,
    kinds::{BlockQuote, CodeFence, ListMarker, TableRow},
    types::{Block, ListItem, Table, TaskState},
};

/// Turns a line sequence into blocks.
///
/// Scanning runs on an explicit stack of frames rather than the call stack:
/// a blockquote pushes a frame holding its stripped lines, and a finished
/// frame is popped and attached to its parent as [`Block::BlockQuote`]. The
/// stack never grows past `max_quote_depth + 1` frames, and `max_quote_depth`
/// never exceeds [`MAX_QUOTE_DEPTH`].
pub struct BlockScanner {
    classifier: MarkdownLineClassifier,
    max_quote_depth: usize,
}

/// One document (or quoted sub-document) being scanned.
struct Frame<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    depth: usize,
    blocks: Vec<Block<'a>>,
}

/// What the scanner does after one dispatch step.
enum Step<'a> {
    /// A block was emitted or a blank line skipped.
    Continue,
    /// A blockquote was consumed; scan its lines in a new frame.
    Enter(Vec<&'a str>),
    /// The frame ran out of lines.
    Finished,
}

impl BlockScanner {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            max_quote_depth: options.max_quote_depth.min(MAX_QUOTE_DEPTH),
        }
    }

    /// Scans a whole document.
    pub fn scan<'a>(&self, lines: Vec<&'a str>) -> Vec<Block<'a>> {
        let mut stack = vec![Frame::new(lines, 0)];

        while let Some(frame) = stack.last_mut() {
            match self.step(frame) {
                Step::Continue => {}
                Step::Enter(quoted) => {
                    let depth = frame.depth + 1;
                    stack.push(Frame::new(quoted, depth));
                }
                Step::Finished => {
                    let Some(done) = stack.pop() else { break };
                    match stack.last_mut() {
                        Some(parent) => parent.blocks.push(Block::BlockQuote(done.blocks)),
                        None => return done.blocks,
                    }
                }
            }
        }

        Vec::new()
    }

    /// Dispatches on the line under the cursor. Precedence: fence, blank, rule,
    /// heading, table, quote, bullet list, ordered list, paragraph. Every branch
    /// but `Finished` advances the cursor by at least one line.
    fn step<'a>(&self, frame: &mut Frame<'a>) -> Step<'a> {
        let Some(line) = frame.current() else {
            return Step::Finished;
        };
        let class = self.classifier.classify(line);
        let quotes_open = frame.depth < self.max_quote_depth;

        if class.is_fence {
            let block = frame.scan_code_block(line);
            frame.blocks.push(block);
            return Step::Continue;
        }

        if class.is_blank {
            frame.cursor += 1;
            return Step::Continue;
        }

        if class.is_rule {
            frame.cursor += 1;
            frame.blocks.push(Block::ThematicBreak);
            return Step::Continue;
        }

        if let Some((level, text)) = class.heading {
            frame.cursor += 1;
            frame.blocks.push(Block::Heading { level, text });
            return Step::Continue;
        }

        if class.has_pipe && frame.separator_follows() {
            let table = frame.scan_table();
            frame.blocks.push(Block::Table(table));
            return Step::Continue;
        }

        if class.is_quote {
            if quotes_open {
                return Step::Enter(frame.take_quote());
            }
            log::debug!(
                "quote depth limit {} reached, rendering `>` as text",
                self.max_quote_depth
            );
        }

        if let Some((marker, _)) = class.list {
            let items = frame.scan_list(marker, &self.classifier);
            let block = match marker {
                ListMarker::Bullet => Block::UnorderedList {
                    is_task_list: items.iter().any(|item| item.task.is_task()),
                    items,
                },
                ListMarker::Ordered => Block::OrderedList { items },
            };
            frame.blocks.push(block);
            return Step::Continue;
        }

        let lines = frame.scan_paragraph(&self.classifier, quotes_open);
        frame.blocks.push(Block::Paragraph { lines });
        Step::Continue
    }
}

impl<'a> Frame<'a> {
    fn new(lines: Vec<&'a str>, depth: usize) -> Self {
        Self {
            lines,
            cursor: 0,
            depth,
            blocks: vec![],
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.cursor).copied()
    }

    /// Whether the line after the cursor is a table separator row. A table
    /// starts where a line with a pipe is followed by one.
    fn separator_follows(&self) -> bool {
        self.lines
            .get(self.cursor + 1)
            .is_some_and(|next| TableRow::is_separator(next))
    }

    /// Consumes an opening fence, the code lines and the closing fence if any.
    /// An unterminated fence runs to the end of the frame.
    fn scan_code_block(&mut self, opener: &'a str) -> Block<'a> {
        let language = CodeFence::language(opener);
        self.cursor += 1;

        let mut lines = vec![];
        while let Some(line) = self.current() {
            self.cursor += 1;
            if CodeFence::is_fence(line) {
                break;
            }
            lines.push(line);
        }

        Block::CodeBlock { language, lines }
    }

    /// Consumes header, separator and body rows. Body rows stop at the first
    /// blank or pipe-free line and are padded or truncated to the header width.
    fn scan_table(&mut self) -> Table<'a> {
        let header = self.current().map(TableRow::split).unwrap_or_default();
        self.cursor += 1;
        let alignments = self
            .current()
            .map(TableRow::split)
            .unwrap_or_default()
            .into_iter()
            .map(TableRow::alignment)
            .collect();
        self.cursor += 1;

        let mut rows = vec![];
        while let Some(line) = self.current() {
            if !TableRow::has_pipe(line) || line.trim().is_empty() {
                break;
            }
            let mut cells = TableRow::split(line);
            cells.resize(header.len(), "");
            rows.push(cells);
            self.cursor += 1;
        }

        Table {
            header,
            alignments,
            rows,
        }
    }

    /// Consumes the run of `>` lines and returns them with one level stripped.
    fn take_quote(&mut self) -> Vec<&'a str> {
        let mut quoted = vec![];
        while let Some(line) = self.current() {
            if !BlockQuote::is_quote(line) {
                break;
            }
            quoted.push(BlockQuote::strip_prefix(line));
            self.cursor += 1;
        }
        quoted
    }

    /// Consumes consecutive items with the same marker kind, each with its
    /// continuation lines.
    fn scan_list(
        &mut self,
        marker: ListMarker,
        classifier: &MarkdownLineClassifier,
    ) -> Vec<ListItem<'a>> {
        let mut items = vec![];

        while let Some(line) = self.current() {
            let text = match ListMarker::parse(line) {
                Some((found, text)) if found == marker => text,
                _ => break,
            };
            self.cursor += 1;

            let mut continuation = vec![];
            while let Some(next) = self.current() {
                if classifier.classify(next).ends_list_item() {
                    break;
                }
                continuation.push(next.trim());
                self.cursor += 1;
            }

            let (task, text) = match marker {
                ListMarker::Bullet => ListMarker::task(text),
                ListMarker::Ordered => (TaskState::None, text),
            };
            items.push(ListItem {
                text,
                continuation,
                task,
            });
        }

        items
    }

    /// Consumes the current line unconditionally, then every following line
    /// that neither starts another block nor opens a table.
    fn scan_paragraph(
        &mut self,
        classifier: &MarkdownLineClassifier,
        quotes_open: bool,
    ) -> Vec<&'a str> {
        let mut lines = vec![];
        if let Some(first) = self.current() {
            lines.push(first);
            self.cursor += 1;
        }

        while let Some(line) = self.current() {
            let class = classifier.classify(line);
            let opens_table = class.has_pipe && self.separator_follows();
            if class.interrupts_paragraph(quotes_open) || opens_table {
                break;
            }
            lines.push(line);
            self.cursor += 1;
        }

        lines
    }
}
