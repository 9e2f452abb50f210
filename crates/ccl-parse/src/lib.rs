#![doc = include_str!("../README.md")]

pub use ccl_tokenizer::{Line, LineKind, Span, Tokenizer};

mod entry;
pub use entry::{COMMENT_KEY, Entry, EntryKind};

mod parser;
pub use parser::Parser;

mod text;
pub use text::{dedent, normalize_newlines};

/// Parse CCL text into its flat list of entries.
///
/// Never fails. Entries come out in source order and duplicate keys are kept
/// as separate entries. Spans are `u32` byte offsets: in sources of 4 GiB or
/// more they stop at `u32::MAX`, while keys and values stay exact.
pub fn parse(source: &str) -> Vec<Entry> {
    Parser::new(source).collect()
}

/// Parse CCL text after stripping the indentation common to all non-blank
/// lines.
///
/// Use this for text lifted out of a deeper nesting level, such as the value
/// of an entry, whose indentation is relative to its parent.
pub fn parse_indented(source: &str) -> Vec<Entry> {
    parse(&dedent(source))
}
