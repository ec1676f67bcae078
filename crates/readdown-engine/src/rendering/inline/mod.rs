//! # Inline Rendering
//!
//! Turns one block's raw text into HTML through a fixed sequence of passes
//! over an explicit node list.
//!
//! ## Architecture
//!
//! The text is escaped once, up front, into a single [`InlineNode::Text`].
//! Each pass then rewrites only the `Text` nodes, splitting them into text,
//! tags and verbatim runs. Nodes emitted by earlier passes are opaque to later
//! ones, so no pass can match across a tag boundary.
//!
//! Pass order: images, links, code spans, `***`/`___`, `**`/`__`, `*`/`_`,
//! `~~`, hard line breaks.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Verbatim, Tag)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of bracketed constructs
//! - **`parser`**: `render_inline()` entry point and the passes
//!
//! ## Raw Zone Precedence
//!
//! Code span contents are verbatim: `` `**not bold**` `` stays literal.
//! Link text and emphasis contents remain open, so `[**a**](b)` renders bold
//! inside the anchor.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::render_inline;
pub use types::InlineNode;
