//! Options for hierarchy building.

/// What to do when a key appears more than once at the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Coerce repeated strings into a list in first-seen order and merge
    /// repeated objects. A string or list meeting an object is an error.
    #[default]
    List,
    /// The later value replaces the earlier one, keeping its position.
    Overwrite,
}

/// What to do with `/= comment` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comments {
    /// Keep them as ordinary entries under the `/` key.
    #[default]
    Keep,
    /// Drop them at every level.
    Strip,
}

/// Options for [`TreeBuilder`](crate::TreeBuilder).
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Duplicate key policy (default: [`DuplicateKeys::List`])
    pub duplicate_keys: DuplicateKeys,

    /// Comment handling (default: [`Comments::Keep`])
    pub comments: Comments,

    /// Deepest nesting level that may be expanded (default: 64)
    /// The root object is level 0.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::List,
            comments: Comments::Keep,
            max_depth: 64,
        }
    }
}

impl BuildOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate key policy.
    pub fn duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Drop `/=` comment entries.
    pub fn strip_comments(mut self) -> Self {
        self.comments = Comments::Strip;
        self
    }

    /// Set the nesting limit.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
