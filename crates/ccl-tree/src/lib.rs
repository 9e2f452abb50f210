#![doc = include_str!("../README.md")]

mod builder;
mod diagnostic;
mod error;
mod options;
mod value;

pub use builder::{TreeBuilder, nested_entries};
pub use ccl_parse::{Entry, EntryKind, Span};
pub use error::{BuildError, BuildErrorKind};
pub use options::{BuildOptions, Comments, DuplicateKeys};
pub use value::{Field, Object, Value, ValueKind};

/// Build a nested object from flat entries with default options.
pub fn build_hierarchy(entries: &[Entry]) -> Result<Object, BuildError> {
    TreeBuilder::new().build(entries)
}

/// Parse CCL text straight into a nested object.
pub fn parse_to_object(source: &str) -> Result<Object, BuildError> {
    build_hierarchy(&ccl_parse::parse(source))
}

/// [`parse_to_object`] with explicit options.
pub fn parse_to_object_with(source: &str, options: BuildOptions) -> Result<Object, BuildError> {
    TreeBuilder::with_options(options).build(&ccl_parse::parse(source))
}

#[cfg(test)]
mod tests;
