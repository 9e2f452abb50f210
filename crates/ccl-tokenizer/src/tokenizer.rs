//! Splits CCL source into classified lines.

use crate::{Line, Span};
use tracing::trace;

/// A tokenizer that produces [`Line`]s from CCL source text.
///
/// Lines are split on `\n` only, exactly like [`str::split`]: a trailing
/// newline produces a final empty line, and empty input produces one empty
/// line. Normalize `\r\n` before tokenizing if the input may contain it.
/// Span offsets saturate at `u32::MAX`.
#[derive(Clone)]
pub struct Tokenizer<'src> {
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: u32,
    /// Set once the last line has been produced.
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            remaining: source,
            pos: 0,
            finished: false,
        }
    }

    /// Get the next line, or `None` once every line has been produced.
    pub fn next_line(&mut self) -> Option<Line<'src>> {
        if self.finished {
            return None;
        }

        let start = self.pos;
        let text = match self.remaining.find('\n') {
            Some(idx) => {
                let text = &self.remaining[..idx];
                self.remaining = &self.remaining[idx + 1..];
                self.pos = self.pos.saturating_add(to_offset(idx + 1));
                text
            }
            None => {
                let text = self.remaining;
                self.remaining = "";
                self.pos = self.pos.saturating_add(to_offset(text.len()));
                self.finished = true;
                text
            }
        };

        let end = start.saturating_add(to_offset(text.len()));
        let line = Line::new(text, Span::new(start, end));
        trace!(
            "Line {:?} at {:?}: indent={} body={:?}",
            line.kind, line.span, line.indent, line.body
        );
        Some(line)
    }
}

/// Byte counts past `u32::MAX` clamp, so spans in sources of 4 GiB or more
/// stop advancing instead of overflowing.
#[inline]
fn to_offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Line<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
