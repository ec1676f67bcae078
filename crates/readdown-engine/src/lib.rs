pub mod io;
pub mod rendering;

// Re-export key types for easier usage
pub use rendering::{
    DEFAULT_MAX_QUOTE_DEPTH, MAX_QUOTE_DEPTH, RenderOptions, blocks_to_html, render,
    render_with_options, scan_blocks,
};
