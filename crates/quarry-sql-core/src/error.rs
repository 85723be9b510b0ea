//! Error types for statement compilation.

/// Errors raised while compiling a statement tree.
///
/// Everything here means the tree itself is malformed; a tree that
/// compiles once compiles forever.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// An INSERT mixes a subselect row source with plain value rows.
    #[error("INSERT cannot mix a subselect with plain value rows")]
    MixedInsertSource,

    /// An INSERT has no rows to compile.
    #[error("INSERT has no values")]
    EmptyInsert,

    /// The statement tree nests deeper than the compiler follows.
    #[error("statement nesting exceeds the supported depth of {limit}")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
    },
}

/// Result type for statement compilation.
pub type Result<T> = std::result::Result<T, BuildError>;
