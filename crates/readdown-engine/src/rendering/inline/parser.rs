use std::ops::Range;

use crate::rendering::{escape::escape_html, url::classify_url};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, LineBreak, Link, Strikethrough},
    types::InlineNode,
};

/// A pass that wraps delimited text in a pair of tags.
struct DelimitedRule {
    delimiter: &'static str,
    open: &'static str,
    close: &'static str,
}

/// Applied in order, after code spans.
const DELIMITED_RULES: [DelimitedRule; 7] = [
    DelimitedRule {
        delimiter: Emphasis::STRONG_EMPHASIS[0],
        open: "<strong><em>",
        close: "</em></strong>",
    },
    DelimitedRule {
        delimiter: Emphasis::STRONG_EMPHASIS[1],
        open: "<strong><em>",
        close: "</em></strong>",
    },
    DelimitedRule {
        delimiter: Emphasis::STRONG[0],
        open: "<strong>",
        close: "</strong>",
    },
    DelimitedRule {
        delimiter: Emphasis::STRONG[1],
        open: "<strong>",
        close: "</strong>",
    },
    DelimitedRule {
        delimiter: Emphasis::EMPHASIS[0],
        open: "<em>",
        close: "</em>",
    },
    DelimitedRule {
        delimiter: Emphasis::EMPHASIS[1],
        open: "<em>",
        close: "</em>",
    },
    DelimitedRule {
        delimiter: Strikethrough::TILDES,
        open: "<del>",
        close: "</del>",
    },
];

/// Renders one block's raw text to HTML.
///
/// The text is escaped before any pass runs, and every pass emits either
/// escaped text or fixed markup, so the result never contains markup that
/// was not produced here. Link and image targets that fail
/// [`classify_url`] are never emitted as attributes.
pub fn render_inline(text: &str) -> String {
    let mut nodes = vec![InlineNode::Text(escape_html(text).into_owned())];

    nodes = rewrite_text(nodes, split_images);
    nodes = rewrite_text(nodes, split_links);
    nodes = rewrite_text(nodes, split_code_spans);
    for rule in &DELIMITED_RULES {
        nodes = rewrite_text(nodes, |text| split_delimited(text, rule));
    }
    nodes = rewrite_text(nodes, split_line_breaks);

    nodes.iter().map(InlineNode::as_html).collect()
}

/// Runs a pass over every `Text` node, leaving other nodes alone.
fn rewrite_text(
    nodes: Vec<InlineNode>,
    pass: impl Fn(&str) -> Vec<InlineNode>,
) -> Vec<InlineNode> {
    nodes
        .into_iter()
        .flat_map(|node| match node {
            InlineNode::Text(text) => pass(&text),
            other => vec![other],
        })
        .collect()
}

/// Collects a pass's output, merging adjacent text into one `Text` node.
#[derive(Default)]
struct NodeBuilder {
    out: Vec<InlineNode>,
    text: String,
}

impl NodeBuilder {
    fn text(&mut self, s: &str) {
        self.text.push_str(s);
    }

    fn node(&mut self, node: InlineNode) {
        self.flush_text();
        self.out.push(node);
    }

    fn tag(&mut self, tag: &str) {
        self.node(InlineNode::Tag(tag.to_string()));
    }

    fn finish(mut self) -> Vec<InlineNode> {
        self.flush_text();
        self.out
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.out.push(InlineNode::Text(std::mem::take(&mut self.text)));
        }
    }
}

/// The pieces of a `[label](target)` or `![label](target)` match.
struct LinkParts<'a> {
    /// The whole match, delimiters included.
    source: &'a str,
    label: &'a str,
    target: &'a str,
}

/// `![alt](src)` becomes `<img>` when the source is safe. Unsafe image syntax
/// stays as literal text that the link pass cannot pick apart.
fn split_images(text: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(text);
    let mut out = NodeBuilder::default();
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.i;
        if let Some(image) = try_parse_link(&mut cur, Link::IMAGE_OPEN) {
            out.text(&text[text_start..start]);
            if classify_url(image.target).is_safe() {
                out.node(InlineNode::Tag(format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    image.target, image.label
                )));
            } else {
                out.node(InlineNode::Verbatim(image.source.to_string()));
            }
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    out.text(&text[text_start..]);
    out.finish()
}

/// `[text](href)` becomes an anchor when the href is safe, otherwise just
/// its text. The text stays open to the emphasis passes.
fn split_links(text: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(text);
    let mut out = NodeBuilder::default();
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.i;
        if let Some(link) = try_parse_link(&mut cur, Link::OPEN) {
            out.text(&text[text_start..start]);
            if classify_url(link.target).is_safe() {
                out.node(InlineNode::Tag(format!("<a href=\"{}\">", link.target)));
                out.text(link.label);
                out.tag("</a>");
            } else {
                out.text(link.label);
            }
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    out.text(&text[text_start..]);
    out.finish()
}

/// Attempts to parse a link or image starting at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>, open: &[u8]) -> Option<LinkParts<'a>> {
    if !cur.starts_with(open) {
        return None;
    }
    let saved = cur.clone();
    let parsed = scan_link(cur, open.len());
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn scan_link<'a>(cur: &mut Cursor<'a>, open_len: usize) -> Option<LinkParts<'a>> {
    let start = cur.i;
    cur.bump_n(open_len);

    let label_start = cur.i;
    cur.bump_until(Link::LABEL_CLOSE).then_some(())?;
    let label = cur.slice_from(label_start);
    cur.bump(); // ]

    if cur.bump()? != Link::TARGET_OPEN {
        return None;
    }
    let target_start = cur.i;
    cur.bump_until(Link::TARGET_CLOSE).then_some(())?;
    let target = cur.slice_from(target_start);
    if target.is_empty() {
        return None;
    }
    cur.bump(); // )

    Some(LinkParts {
        source: cur.slice_from(start),
        label,
        target,
    })
}

/// `` `code` `` becomes `<code>`; the contents are closed to later passes.
fn split_code_spans(text: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(text);
    let mut out = NodeBuilder::default();
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.i;
        if let Some(code) = try_parse_code_span(&mut cur) {
            out.text(&text[text_start..start]);
            out.tag(CodeSpan::OPEN_TAG);
            out.node(InlineNode::Verbatim(code.to_string()));
            out.tag(CodeSpan::CLOSE_TAG);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    out.text(&text[text_start..]);
    out.finish()
}

/// Attempts to parse a non-empty code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty or if it isn't
/// closed. On failure, cursor position is restored.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.i;

    if !cur.bump_until(CodeSpan::TICK) || cur.i == inner_start {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump(); // closing `

    Some(inner)
}

/// Wraps every `delimiter … delimiter` pair, leftmost first, in the rule's tags.
fn split_delimited(text: &str, rule: &DelimitedRule) -> Vec<InlineNode> {
    let mut out = NodeBuilder::default();
    let mut pos = 0;

    while let Some(found) = find_delimited(text, pos, rule.delimiter) {
        out.text(&text[pos..found.open]);
        out.tag(rule.open);
        out.text(&text[found.inner]);
        out.tag(rule.close);
        pos = found.end;
    }

    out.text(&text[pos..]);
    out.finish()
}

/// Byte positions of one delimited match.
struct DelimitedMatch {
    open: usize,
    inner: Range<usize>,
    end: usize,
}

/// Finds the leftmost opening delimiter that has a closing delimiter later on
/// the same line with at least one character between them. The closing
/// delimiter is the nearest one.
fn find_delimited(text: &str, from: usize, delimiter: &str) -> Option<DelimitedMatch> {
    let mut search = from;

    while let Some(offset) = text[search..].find(delimiter) {
        let open = search + offset;
        let inner_start = open + delimiter.len();
        let line_end = text[inner_start..]
            .find('\n')
            .map_or(text.len(), |n| inner_start + n);

        if let Some(first) = text[inner_start..line_end].chars().next() {
            let body_start = inner_start + first.len_utf8();
            if let Some(close) = text[body_start..line_end].find(delimiter) {
                let inner_end = body_start + close;
                return Some(DelimitedMatch {
                    open,
                    inner: inner_start..inner_end,
                    end: inner_end + delimiter.len(),
                });
            }
        }

        // Delimiters are ASCII, so one byte on is a char boundary.
        search = open + 1;
    }

    None
}

/// Two trailing spaces before a newline become `<br>`; the newline stays.
fn split_line_breaks(text: &str) -> Vec<InlineNode> {
    let mut out = NodeBuilder::default();
    let mut rest = text;

    while let Some((before, after)) = rest.split_once(LineBreak::HARD) {
        out.text(before);
        out.tag(LineBreak::TAG);
        out.text("\n");
        rest = after;
    }

    out.text(rest);
    out.finish()
}
