//! Errors raised while building a hierarchy.

use std::fmt;

use ccl_parse::Span;

use crate::ValueKind;

/// A value that could not be placed in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    /// Keys from the root down to the offending key.
    pub path: Vec<String>,
    /// Raw text of the entry value that could not be placed.
    pub value: String,
    /// Span of the top-level entry the failure was found under.
    pub span: Span,
}

/// Why a value could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// A repeated key resolved to shapes that cannot be combined.
    ConflictingTypes {
        existing: ValueKind,
        incoming: ValueKind,
    },
    /// An `= item` line whose value is itself nested CCL.
    NestedListItem,
    /// Nesting went deeper than the configured limit.
    DepthLimitExceeded { limit: usize },
}

impl BuildError {
    /// The path joined with `.`.
    pub fn path_display(&self) -> String {
        self.path.join(".")
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path_display();
        match &self.kind {
            BuildErrorKind::ConflictingTypes { existing, incoming } => write!(
                f,
                "conflicting values for `{path}`: {existing} and {incoming}"
            ),
            BuildErrorKind::NestedListItem => {
                write!(f, "list item under `{path}` contains nested entries")
            }
            BuildErrorKind::DepthLimitExceeded { limit } => write!(
                f,
                "nesting under `{path}` exceeds the depth limit of {limit}"
            ),
        }
    }
}

impl std::error::Error for BuildError {}
