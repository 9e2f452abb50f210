//! Single-pass flat parser.
//!
//! The parser walks the source line by line keeping one entry under
//! construction. A line indented deeper than that entry's key line is part
//! of its value; anything else closes it and starts the next entry. The
//! first non-blank line fixes the base indentation: only lines at or below
//! it can start a `key = value` entry.

use ccl_tokenizer::{Line, Span, Tokenizer};
use tracing::trace;

use crate::{Entry, EntryKind};


/// Streaming CCL parser yielding one [`Entry`] at a time.
#[derive(Clone)]
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    /// Indentation of the first non-blank line.
    base_indent: Option<usize>,
    /// The entry still accepting value lines.
    pending: Option<PendingEntry<'src>>,
}

/// An entry whose value region has not ended yet.
#[derive(Debug, Clone)]
struct PendingEntry<'src> {
    key: &'src str,
    kind: EntryKind,
    /// Indentation of the line that started the entry.
    key_indent: usize,
    /// First line is the inline value, later lines are raw continuations
    /// or `""` for blank lines.
    value_lines: Vec<&'src str>,
    span: Span,
}

impl<'src> PendingEntry<'src> {
    fn assignment(line: &Line<'src>, key: &'src str, value: &'src str) -> Self {
        Self {
            key: key.trim_matches(' '),
            kind: EntryKind::Assignment,
            key_indent: line.indent,
            value_lines: vec![value.trim_matches(' ')],
            span: line.span,
        }
    }

    fn key_only(line: &Line<'src>) -> Self {
        Self {
            key: line.body,
            kind: EntryKind::KeyOnly,
            key_indent: line.indent,
            value_lines: vec![""],
            span: line.span,
        }
    }

    fn push_continuation(&mut self, line: &Line<'src>) {
        self.value_lines.push(line.text);
        self.span = self.span.cover(line.span);
    }

    fn finish(self) -> Entry {
        let joined = self.value_lines.join("\n");
        let entry = Entry {
            key: self.key.to_string(),
            value: joined.trim_end().to_string(),
            kind: self.kind,
            span: self.span,
        };
        trace!(key = %entry.key, kind = ?entry.kind, span = ?entry.span, "entry");
        entry
    }
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            base_indent: None,
            pending: None,
        }
    }

    /// Indentation that top-level entries are measured against, once known.
    pub fn base_indent(&self) -> Option<usize> {
        self.base_indent
    }

    /// Get the next finished entry.
    pub fn next_entry(&mut self) -> Option<Entry> {
        while let Some(line) = self.tokenizer.next_line() {
            if line.is_blank() {
                // Blank lines before the first entry are dropped; inside a
                // value they are kept as empty lines.
                if let Some(pending) = self.pending.as_mut() {
                    pending.value_lines.push("");
                }
                continue;
            }

            let base = *self.base_indent.get_or_insert(line.indent);

            if let Some(pending) = self.pending.as_mut() {
                if line.indent > pending.key_indent {
                    pending.push_continuation(&line);
                    continue;
                }
            }

            let started = match line.split_assignment() {
                Some((key, value)) if line.indent <= base => {
                    PendingEntry::assignment(&line, key, value)
                }
                _ => PendingEntry::key_only(&line),
            };

            if let Some(finished) = self.pending.replace(started) {
                return Some(finished.finish());
            }
        }

        self.pending.take().map(PendingEntry::finish)
    }

    /// Parse everything into a vector.
    pub fn parse_to_vec(self) -> Vec<Entry> {
        self.collect()
    }
}

impl Iterator for Parser<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry()
    }
}
