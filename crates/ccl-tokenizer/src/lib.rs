//! A line classifier for CCL.
//!
//! CCL structure is carried entirely by indentation, so the tokenizer works
//! on whole lines: each line is split into its indentation width and its
//! trimmed body.

mod span;
pub use span::Span;

mod line;
pub use line::{Line, LineKind, classify, is_indent_char};

mod tokenizer;
pub use tokenizer::Tokenizer;
