//! # Rendering
//!
//! Markdown source in, HTML fragment out. The fragment never contains
//! `<html>`, `<head>`, `<body>` or `<script>`; callers wrap it in a page.
//!
//! ## Phases
//!
//! 1. **Line splitting** (`lines`): the document becomes a sequence of borrowed lines
//! 2. **Block scanning** (`blocks`): an explicit work stack turns lines into [`Block`]s,
//!    descending into blockquotes without recursion
//! 3. **Emission** (`blocks::html`): each block becomes HTML; block text goes through
//!    the inline pipeline (`inline`), which escapes first and filters every URL (`url`)
//!
//! Rendering holds no state between calls, so documents can be rendered from
//! any number of threads at once.

pub mod blocks;
pub mod escape;
pub mod inline;
pub mod lines;
pub mod url;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockScanner};

pub use blocks::html::blocks_to_html;

/// Quote nesting deeper than this renders the extra `>` markers as text.
pub const DEFAULT_MAX_QUOTE_DEPTH: usize = 32;

/// Hard ceiling on quote nesting. Larger `max_quote_depth` values are
/// clamped to it, since emission recurses once per quote level.
pub const MAX_QUOTE_DEPTH: usize = 256;

/// Knobs for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How many blockquotes may nest inside each other, up to
    /// [`MAX_QUOTE_DEPTH`].
    pub max_quote_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_quote_depth: DEFAULT_MAX_QUOTE_DEPTH,
        }
    }
}

/// Renders a Markdown document to an HTML fragment with default options.
///
/// Total over all inputs: malformed constructs degrade to text, never to errors.
pub fn render(markdown: &str) -> String {
    render_with_options(markdown, &RenderOptions::default())
}

/// Renders a Markdown document to an HTML fragment.
pub fn render_with_options(markdown: &str, options: &RenderOptions) -> String {
    blocks_to_html(&scan_blocks(markdown, options))
}

/// Scans a document into its block sequence without emitting HTML.
pub fn scan_blocks<'a>(markdown: &'a str, options: &RenderOptions) -> Vec<Block<'a>> {
    BlockScanner::new(options).scan(lines::split_lines(markdown))
}
