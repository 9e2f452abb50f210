//! Hierarchy builder over flat entries.
//!
//! Every entry value that is itself CCL is re-parsed with
//! [`ccl_parse::parse_indented`] and expanded in turn, until no value at any
//! level holds further nested entries. Expansion runs on an explicit stack of
//! frames, one per nesting level, so the depth limit is checked before each
//! push rather than enforced by native recursion.

use std::mem;

use ccl_parse::{Entry, EntryKind, Span, parse_indented};
use tracing::debug;

use crate::options::{Comments, DuplicateKeys};
use crate::value::{Field, Object, Value};
use crate::{BuildError, BuildErrorKind, BuildOptions};

/// Builds [`Object`] trees from flat entries.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
}

/// One level of nesting being expanded. The root object is not a frame.
struct Frame {
    /// Key this frame's value will be stored under in its parent.
    key: String,
    /// Raw text the frame was parsed from.
    raw: String,
    /// Span of the top-level entry this frame descends from.
    span: Span,
    entries: std::vec::IntoIter<Entry>,
    contents: Contents,
}

enum Contents {
    Object(Object),
    /// A block where every line is `= item`.
    List(Vec<String>),
}

impl Contents {
    fn into_value(self) -> Value {
        match self {
            Contents::Object(obj) => Value::Object(obj),
            Contents::List(items) => Value::List(items),
        }
    }
}

/// Entries nested in `value`, if it holds any.
///
/// A value counts as nested CCL only when it spans several lines and every
/// top-level line of its dedented text is a `key = value` assignment. Single
/// line values such as `http://host?a=b` and prose that merely contains `=`
/// stay leaf strings.
///
/// The root level has no such test. The same lines give different shapes
/// depending on where they sit:
///
/// ```
/// use ccl_tree::{Value, parse_to_object};
///
/// // At the root, a standalone key is an entry with an empty value.
/// let root = parse_to_object("host = x\ndebug").unwrap();
/// assert_eq!(root.get("debug").and_then(Value::as_str), Some(""));
///
/// // Nested, the standalone key makes the whole block text.
/// let nested = parse_to_object("server =\n  host = x\n  debug").unwrap();
/// assert_eq!(
///     nested.get("server").and_then(Value::as_str),
///     Some("\n  host = x\n  debug"),
/// );
/// ```
pub fn nested_entries(value: &str) -> Option<Vec<Entry>> {
    if !value.contains('\n') || !value.contains('=') {
        return None;
    }
    let entries = parse_indented(value);
    if entries.is_empty() || entries.iter().any(|e| e.kind != EntryKind::Assignment) {
        return None;
    }
    Some(entries)
}

impl TreeBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Build the object described by `entries`.
    pub fn build(&self, entries: &[Entry]) -> Result<Object, BuildError> {
        let mut root = Object::new();
        let mut root_entries = entries.to_vec().into_iter();
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.entries.next(),
                None => root_entries.next(),
            };

            let Some(entry) = next else {
                let Some(done) = stack.pop() else {
                    return Ok(root);
                };
                let path = entry_path(&stack, &done.key);
                let value = done.contents.into_value();
                self.place(&mut stack, &mut root, done.key, value, &done.raw, done.span, path)?;
                continue;
            };

            if self.options.comments == Comments::Strip && entry.is_comment() {
                continue;
            }

            let span = stack.last().map_or(entry.span, |f| f.span);

            let Some(children) = nested_entries(&entry.value) else {
                let path = entry_path(&stack, &entry.key);
                let value = Value::String(entry.value.clone());
                self.place(&mut stack, &mut root, entry.key, value, &entry.value, span, path)?;
                continue;
            };

            if let Some(Frame {
                contents: Contents::List(_),
                ..
            }) = stack.last()
            {
                return Err(BuildError {
                    kind: BuildErrorKind::NestedListItem,
                    path: frame_path(&stack),
                    value: entry.value,
                    span,
                });
            }

            if stack.len() >= self.options.max_depth {
                debug!(depth = stack.len(), key = %entry.key, "depth limit reached");
                return Err(BuildError {
                    kind: BuildErrorKind::DepthLimitExceeded {
                        limit: self.options.max_depth,
                    },
                    path: entry_path(&stack, &entry.key),
                    value: entry.value,
                    span,
                });
            }

            let list_block = {
                let mut kept = children
                    .iter()
                    .filter(|e| !(self.options.comments == Comments::Strip && e.is_comment()))
                    .peekable();
                kept.peek().is_some() && kept.all(|e| e.key.is_empty())
            };
            debug!(
                depth = stack.len() + 1,
                key = %entry.key,
                entries = children.len(),
                list = list_block,
                "descending into nested value"
            );
            stack.push(Frame {
                key: entry.key,
                raw: entry.value,
                span,
                entries: children.into_iter(),
                contents: if list_block {
                    Contents::List(Vec::new())
                } else {
                    Contents::Object(Object::new())
                },
            });
        }
    }

    /// Store a resolved value in the innermost open frame, or the root.
    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        stack: &mut [Frame],
        root: &mut Object,
        key: String,
        value: Value,
        raw: &str,
        span: Span,
        path: Vec<String>,
    ) -> Result<(), BuildError> {
        let obj = match stack.last_mut() {
            None => root,
            Some(Frame {
                contents: Contents::Object(obj),
                ..
            }) => obj,
            Some(Frame {
                contents: Contents::List(items),
                ..
            }) => {
                if let Value::String(item) = value {
                    items.push(item);
                    return Ok(());
                }
                return Err(BuildError {
                    kind: BuildErrorKind::NestedListItem,
                    path: path[..path.len().saturating_sub(1)].to_vec(),
                    value: raw.to_string(),
                    span,
                });
            }
        };

        let Some(existing) = obj.get_mut(&key) else {
            obj.fields.push(Field { key, value });
            return Ok(());
        };

        match self.options.duplicate_keys {
            DuplicateKeys::Overwrite => {
                debug!(key = %key, "overwriting duplicate key");
                *existing = value;
                Ok(())
            }
            DuplicateKeys::List => merge(existing, value, path).map_err(|(path, kind)| BuildError {
                kind,
                path,
                value: raw.to_string(),
                span,
            }),
        }
    }
}

/// Combine a repeated key's values under the list policy.
fn merge(
    existing: &mut Value,
    incoming: Value,
    path: Vec<String>,
) -> Result<(), (Vec<String>, BuildErrorKind)> {
    match (&mut *existing, incoming) {
        (Value::String(first), Value::String(second)) => {
            debug!(path = %path.join("."), "coercing repeated key to list");
            let first = mem::take(first);
            *existing = Value::List(vec![first, second]);
        }
        (Value::String(first), Value::List(more)) => {
            let mut items = vec![mem::take(first)];
            items.extend(more);
            *existing = Value::List(items);
        }
        (Value::List(items), Value::String(item)) => items.push(item),
        (Value::List(items), Value::List(more)) => items.extend(more),
        (Value::Object(obj), Value::Object(other)) => {
            debug!(path = %path.join("."), "merging repeated object");
            for Field { key, value } in other.fields {
                let mut child_path = path.clone();
                child_path.push(key.clone());
                match obj.get_mut(&key) {
                    Some(slot) => merge(slot, value, child_path)?,
                    None => obj.fields.push(Field { key, value }),
                }
            }
        }
        (current, incoming) => {
            return Err((
                path,
                BuildErrorKind::ConflictingTypes {
                    existing: current.kind(),
                    incoming: incoming.kind(),
                },
            ));
        }
    }
    Ok(())
}

/// Keys of every open frame, outermost first.
fn frame_path(stack: &[Frame]) -> Vec<String> {
    stack.iter().map(|f| f.key.clone()).collect()
}

fn entry_path(stack: &[Frame], key: &str) -> Vec<String> {
    let mut path = frame_path(stack);
    path.push(key.to_string());
    path
}
