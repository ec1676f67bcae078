//! Integration tests for the rendering module.
//!
//! Fixtures (.md) and their expected output (.html) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;

use crate::rendering::{
    MAX_QUOTE_DEPTH, RenderOptions,
    blocks::{Alignment, Block, ListItem, TaskState},
    render, render_with_options, scan_blocks,
};

// Fixture-based tests

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

#[test]
fn fixture_code_and_tables() {
    assert_fixture("code_and_tables");
}

#[test]
fn fixture_unsafe_links() {
    assert_fixture("unsafe_links");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/rendering/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let options = RenderOptions::default();
    invariants::check(&scan_blocks(&md, &options), &options);

    assert_eq!(render(&md), expected.trim_end());
}

fn scan(md: &str) -> Vec<Block<'_>> {
    let options = RenderOptions::default();
    let blocks = scan_blocks(md, &options);
    invariants::check(&blocks, &options);
    blocks
}

fn item(text: &str) -> ListItem<'_> {
    ListItem {
        text,
        continuation: vec![],
        task: TaskState::None,
    }
}

// Block structure

#[test]
fn empty_document_has_no_blocks() {
    assert!(scan("").is_empty());
    assert!(scan("\n  \n\t\n").is_empty());
    assert_eq!(render(""), "");
}

#[test]
fn heading_keeps_surplus_markers() {
    assert_eq!(
        scan("####### x"),
        vec![Block::Heading {
            level: 6,
            text: "# x"
        }]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        scan("```\ncode\n# not a heading"),
        vec![Block::CodeBlock {
            language: None,
            lines: vec!["code", "# not a heading"],
        }]
    );
}

#[test]
fn fence_wins_over_everything_inside_it() {
    assert_eq!(
        scan("```md\n> quote\n- item\n```\nafter"),
        vec![
            Block::CodeBlock {
                language: Some("md"),
                lines: vec!["> quote", "- item"],
            },
            Block::Paragraph {
                lines: vec!["after"]
            },
        ]
    );
}

#[test]
fn paragraph_stops_at_rule() {
    assert_eq!(
        scan("text\n---"),
        vec![
            Block::Paragraph {
                lines: vec!["text"]
            },
            Block::ThematicBreak,
        ]
    );
}

#[test]
fn paragraph_stops_at_table() {
    let blocks = scan("intro\na|b\n-|-\n1|2");
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        Block::Paragraph {
            lines: vec!["intro"]
        }
    );
    let Block::Table(table) = &blocks[1] else {
        panic!("expected table, got {:?}", blocks[1]);
    };
    assert_eq!(table.header, vec!["a", "b"]);
    assert_eq!(table.rows, vec![vec!["1", "2"]]);
}

#[test]
fn lone_rule_after_pipe_line_is_not_a_separator() {
    assert_eq!(
        scan("a | b\n---"),
        vec![
            Block::Paragraph {
                lines: vec!["a | b"]
            },
            Block::ThematicBreak,
        ]
    );
    assert_eq!(render("Total: a | b\n---"), "<p>Total: a | b</p>\n<hr>");
}

#[test]
fn pipe_line_without_separator_is_paragraph_text() {
    assert_eq!(
        scan("a | b\nc"),
        vec![Block::Paragraph {
            lines: vec!["a | b", "c"]
        }]
    );
}

#[test]
fn table_body_stops_at_line_without_pipe() {
    let blocks = scan("| A | B |\n| :-: | --: |\n| 1 | 2 |\nplain");
    let Block::Table(table) = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(table.alignments, vec![Alignment::Center, Alignment::Right]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(
        blocks[1],
        Block::Paragraph {
            lines: vec!["plain"]
        }
    );
}

#[test]
fn bullets_of_any_kind_share_one_list() {
    assert_eq!(
        scan("- a\n* b\n+ c"),
        vec![Block::UnorderedList {
            items: vec![item("a"), item("b"), item("c")],
            is_task_list: false,
        }]
    );
}

#[test]
fn switching_marker_kind_starts_new_list() {
    assert_eq!(
        scan("- a\n1. b"),
        vec![
            Block::UnorderedList {
                items: vec![item("a")],
                is_task_list: false,
            },
            Block::OrderedList {
                items: vec![item("b")]
            },
        ]
    );
}

#[test]
fn ordered_items_never_become_tasks() {
    assert_eq!(
        scan("1. [x] done"),
        vec![Block::OrderedList {
            items: vec![item("[x] done")]
        }]
    );
}

#[test]
fn continuation_lines_are_trimmed() {
    assert_eq!(
        scan("- first\n   more\n\tand more"),
        vec![Block::UnorderedList {
            items: vec![ListItem {
                text: "first",
                continuation: vec!["more", "and more"],
                task: TaskState::None,
            }],
            is_task_list: false,
        }]
    );
}

#[test]
fn quote_lines_form_one_sub_document() {
    assert_eq!(
        scan("> a\n> b\n>\n> # c"),
        vec![Block::BlockQuote(vec![
            Block::Paragraph {
                lines: vec!["a", "b"]
            },
            Block::Heading {
                level: 1,
                text: "c"
            },
        ])]
    );
}

#[test]
fn crlf_scans_like_lf() {
    assert_eq!(
        scan("# T\r\n\r\ntext\r\nmore\r\n"),
        scan("# T\n\ntext\nmore\n")
    );
}

// Quote depth

#[test]
fn quotes_beyond_limit_render_as_text() {
    let options = RenderOptions { max_quote_depth: 2 };
    let md = ">>>> deep";

    let blocks = scan_blocks(md, &options);
    invariants::check(&blocks, &options);

    assert_eq!(
        render_with_options(md, &options),
        "<blockquote><blockquote><p>&gt;&gt; deep</p></blockquote></blockquote>"
    );
}

#[test]
fn zero_depth_disables_quotes() {
    let options = RenderOptions { max_quote_depth: 0 };
    assert_eq!(
        render_with_options("> not quoted\n> still text", &options),
        "<p>&gt; not quoted\n&gt; still text</p>"
    );
}

#[test]
fn adversarial_nesting_does_not_overflow() {
    let md = format!("{} bottom", ">".repeat(100_000));
    let options = RenderOptions::default();

    let blocks = scan_blocks(&md, &options);
    invariants::check(&blocks, &options);

    let html = render(&md);
    assert_eq!(
        html.matches("<blockquote>").count(),
        options.max_quote_depth
    );
    assert!(html.contains(" bottom</p>"));
}

#[test]
fn oversized_depth_option_is_clamped() {
    let options = RenderOptions {
        max_quote_depth: usize::MAX,
    };
    let md = ">".repeat(200_000);

    let blocks = scan_blocks(&md, &options);
    invariants::check(&blocks, &options);

    let html = render_with_options(&md, &options);
    assert_eq!(html.matches("<blockquote>").count(), MAX_QUOTE_DEPTH);
}

// Rendering

#[test]
fn rendering_is_deterministic() {
    let md = "# T\n\n- [ ] a\n\n| x | y |\n|---|---|\n| 1 |";
    assert_eq!(render(md), render(md));
}

#[test]
fn concurrent_renders_agree() {
    let md = "> *quoted* [link](https://example.com)\n\n```\ncode\n```";
    let expected = render(md);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || render(md)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
