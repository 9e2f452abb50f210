//! Flat parse output.

use crate::Span;

/// Key used by CCL comments: `/= this is a comment`.
pub const COMMENT_KEY: &str = "/";

/// How an entry was introduced in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
#[repr(u8)]
pub enum EntryKind {
    /// A `key = value` line.
    #[default]
    Assignment,
    /// A line with no `=`, taken whole as the key.
    KeyOnly,
}

/// One `key = value` pair from a flat parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct Entry {
    /// Text before the first `=`, with surrounding spaces removed.
    /// May be empty.
    pub key: String,
    /// The first value line plus any continuation lines, joined with `\n`,
    /// trailing whitespace removed.
    pub value: String,
    pub kind: EntryKind,
    /// From the start of the key line to the end of the last non-blank line
    /// that belongs to this entry.
    pub span: Span,
}

impl Entry {
    /// An assignment entry with no source location.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: EntryKind::Assignment,
            span: Span::default(),
        }
    }

    /// A standalone key with an empty value and no source location.
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            kind: EntryKind::KeyOnly,
            span: Span::default(),
        }
    }

    /// Whether this entry is a `/=` comment.
    pub fn is_comment(&self) -> bool {
        self.key == COMMENT_KEY
    }
}
