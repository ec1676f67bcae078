use crate::rendering::{escape::escape_html, inline::render_inline};

use super::types::{Block, ListItem, Table, TaskState};

/// Emits blocks as an HTML fragment, one block per line.
///
/// Quote children are emitted through this same function; the nesting depth
/// is already bounded by the scanner.
pub fn blocks_to_html(blocks: &[Block<'_>]) -> String {
    blocks
        .iter()
        .map(block_to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_to_html(block: &Block<'_>) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", render_inline(text))
        }
        Block::Paragraph { lines } => format!("<p>{}</p>", render_inline(&lines.join("\n"))),
        Block::CodeBlock { language, lines } => code_block_to_html(*language, lines),
        Block::ThematicBreak => "<hr>".to_string(),
        Block::BlockQuote(children) => {
            format!("<blockquote>{}</blockquote>", blocks_to_html(children))
        }
        Block::UnorderedList {
            items,
            is_task_list,
        } => {
            let class = if *is_task_list {
                " class=\"task-list\""
            } else {
                ""
            };
            format!("<ul{class}>{}</ul>", list_items_to_html(items))
        }
        Block::OrderedList { items } => format!("<ol>{}</ol>", list_items_to_html(items)),
        Block::Table(table) => table_to_html(table),
    }
}

/// Code is escaped but otherwise untouched: no inline rendering inside fences.
fn code_block_to_html(language: Option<&str>, lines: &[&str]) -> String {
    let class = language
        .map(|lang| format!(" class=\"language-{}\"", escape_html(lang)))
        .unwrap_or_default();
    let code = lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<pre><code{class}>{code}</code></pre>")
}

fn list_items_to_html(items: &[ListItem<'_>]) -> String {
    items.iter().map(list_item_to_html).collect()
}

fn list_item_to_html(item: &ListItem<'_>) -> String {
    let mut html = String::from(match item.task {
        TaskState::None => "<li>",
        TaskState::Unchecked => "<li class=\"task-item\"><input type=\"checkbox\" disabled> ",
        TaskState::Checked => {
            "<li class=\"task-item\"><input type=\"checkbox\" checked disabled> "
        }
    });
    html.push_str(&render_inline(item.text));
    for line in &item.continuation {
        html.push_str("<br>");
        html.push_str(&render_inline(line));
    }
    html.push_str("</li>");
    html
}

fn table_to_html(table: &Table<'_>) -> String {
    let mut html = String::from("<table><thead><tr>");
    for (column, cell) in table.header.iter().enumerate() {
        push_cell(&mut html, "th", table, column, cell);
    }
    html.push_str("</tr></thead><tbody>");

    for row in &table.rows {
        html.push_str("<tr>");
        for (column, cell) in row.iter().enumerate() {
            push_cell(&mut html, "td", table, column, cell);
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn push_cell(html: &mut String, tag: &str, table: &Table<'_>, column: usize, cell: &str) {
    let align = table.alignment(column).as_str();
    html.push_str(&format!(
        "<{tag} align=\"{align}\">{}</{tag}>",
        render_inline(cell.trim())
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::blocks::types::Alignment;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        let html = blocks_to_html(&[Block::Heading {
            level: 2,
            text: "Sub *title*",
        }]);
        assert_eq!(html, "<h2>Sub <em>title</em></h2>");
    }

    #[test]
    fn code_block_escapes_and_skips_inline() {
        let html = blocks_to_html(&[Block::CodeBlock {
            language: Some("html"),
            lines: vec!["<b>**x**</b>", "  indented"],
        }]);
        assert_eq!(
            html,
            "<pre><code class=\"language-html\">&lt;b&gt;**x**&lt;/b&gt;\n  indented</code></pre>"
        );
    }

    #[test]
    fn code_block_language_is_escaped() {
        let html = blocks_to_html(&[Block::CodeBlock {
            language: Some("a\"onmouseover"),
            lines: vec![],
        }]);
        assert!(html.starts_with("<pre><code class=\"language-a&quot;onmouseover\">"));
    }

    #[test]
    fn blocks_are_joined_by_newline() {
        let html = blocks_to_html(&[Block::ThematicBreak, Block::ThematicBreak]);
        assert_eq!(html, "<hr>\n<hr>");
    }

    #[test]
    fn empty_quote() {
        assert_eq!(
            blocks_to_html(&[Block::BlockQuote(vec![])]),
            "<blockquote></blockquote>"
        );
    }

    #[test]
    fn task_list_items() {
        let html = blocks_to_html(&[Block::UnorderedList {
            items: vec![
                ListItem {
                    text: "done",
                    continuation: vec![],
                    task: TaskState::Checked,
                },
                ListItem {
                    text: "todo",
                    continuation: vec!["more"],
                    task: TaskState::Unchecked,
                },
            ],
            is_task_list: true,
        }]);
        assert_eq!(
            html,
            "<ul class=\"task-list\">\
             <li class=\"task-item\"><input type=\"checkbox\" checked disabled> done</li>\
             <li class=\"task-item\"><input type=\"checkbox\" disabled> todo<br>more</li>\
             </ul>"
        );
    }

    #[test]
    fn table_cells_are_trimmed_and_aligned() {
        let html = blocks_to_html(&[Block::Table(Table {
            header: vec![" A ", "B"],
            alignments: vec![Alignment::Center],
            rows: vec![vec!["1", " **2** "]],
        })]);
        assert_eq!(
            html,
            "<table><thead><tr><th align=\"center\">A</th><th align=\"left\">B</th></tr></thead>\
             <tbody><tr><td align=\"center\">1</td><td align=\"left\"><strong>2</strong></td></tr></tbody></table>"
        );
    }
}
