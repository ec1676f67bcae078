//! # Block Scanning
//!
//! Lines become blocks in two steps, then blocks become HTML.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank, rule, fence, heading, quote, list marker)
//!
//! 2. **Block Construction** (`scanner`): A `BlockScanner` walks the lines with a cursor,
//!    tries block types in a fixed precedence order and emits [`Block`]s. Blockquotes
//!    push a new frame on an explicit work stack instead of recursing.
//!
//! 3. **Emission** (`html`): Blocks are written out as HTML, with block text passed
//!    through the inline pipeline.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListItem`, `TaskState`, `Alignment`, `Table`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`scanner`**: `BlockScanner` work-stack dispatcher
//! - **`html`**: `blocks_to_html` emission
//!
//! ## Key Invariants
//!
//! - Every dispatch step consumes at least one line, so scanning always terminates
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Quote nesting is bounded by `RenderOptions::max_quote_depth`

pub mod classify;
pub mod html;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use scanner::BlockScanner;
pub use types::{Alignment, Block, ListItem, Table, TaskState};
