//! Classified source lines.

use crate::Span;

/// What a line looks like once its indentation is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty, or only spaces and tabs.
    Blank,
    /// Contains `=`: the text before the first `=` is a key.
    Assignment,
    /// Non-blank with no `=`: a standalone key, or value text.
    Text,
}

/// One line of CCL source, without its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'src> {
    /// The raw line text, indentation included.
    pub text: &'src str,
    /// Number of leading space and tab characters. Tabs count as one.
    pub indent: usize,
    /// The line with leading and trailing spaces and tabs removed.
    pub body: &'src str,
    /// Where `text` sits in the source.
    pub span: Span,
    pub kind: LineKind,
}

impl<'src> Line<'src> {
    /// Classify `text`, which must not contain `\n`.
    pub fn new(text: &'src str, span: Span) -> Self {
        let (indent, body) = classify(text);
        let kind = if body.is_empty() {
            LineKind::Blank
        } else if body.contains('=') {
            LineKind::Assignment
        } else {
            LineKind::Text
        };
        Self {
            text,
            indent,
            body,
            span,
            kind,
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    /// Split the line at its first `=`, after the indentation.
    ///
    /// Both halves come from the raw text, so trailing tabs survive on the
    /// value side. Returns `None` for lines that are not assignments.
    pub fn split_assignment(&self) -> Option<(&'src str, &'src str)> {
        // Indentation is ASCII, so its character count is its byte length.
        self.text[self.indent..].split_once('=')
    }
}

/// Whether `c` counts toward indentation.
#[inline]
pub fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split a line into its indentation width and trimmed body.
///
/// Width is a raw character count: a tab is one, not a tab stop.
pub fn classify(text: &str) -> (usize, &str) {
    let indent = text.chars().take_while(|&c| is_indent_char(c)).count();
    (indent, text.trim_matches(is_indent_char))
}
