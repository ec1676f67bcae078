pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
pub use table::TableRow;
pub use thematic_break::ThematicBreak;
