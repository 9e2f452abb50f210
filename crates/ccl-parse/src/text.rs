//! Text preparation applied around parsing.

use std::borrow::Cow;

use ccl_tokenizer::{classify, is_indent_char};

/// Strip the indentation shared by every non-blank line.
///
/// Blank lines do not count toward the shared width and lose whatever
/// leading spaces and tabs they have, up to that width. Returns the input
/// unchanged when nothing is shared.
pub fn dedent(source: &str) -> Cow<'_, str> {
    let common = source
        .split('\n')
        .map(classify)
        .filter(|(_, body)| !body.is_empty())
        .map(|(indent, _)| indent)
        .min()
        .unwrap_or(0);
    if common == 0 {
        return Cow::Borrowed(source);
    }

    let lines: Vec<&str> = source
        .split('\n')
        .map(|line| {
            let strip = line
                .chars()
                .take(common)
                .take_while(|&c| is_indent_char(c))
                .count();
            &line[strip..]
        })
        .collect();
    Cow::Owned(lines.join("\n"))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(source: &str) -> Cow<'_, str> {
    if !source.contains('\r') {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
}
