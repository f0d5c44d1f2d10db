//! Form renderers.

mod text;

pub use text::TextFormRenderer;
