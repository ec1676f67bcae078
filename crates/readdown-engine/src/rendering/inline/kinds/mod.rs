//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other passes inside it
//! - **`Link`**: `[`, `![`, `]`, `(`, `)` - links and images share one shape
//! - **`Emphasis`**: `***`/`___`, `**`/`__`, `*`/`_`
//! - **`Strikethrough`**: `~~`
//! - **`LineBreak`**: two spaces before a newline
//!
//! The parser calls these constants; it never hardcodes `[` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod line_break;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough};
pub use line_break::LineBreak;
pub use link::Link;
