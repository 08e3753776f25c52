use thiserror::Error;

/// Errors raised while parsing, navigating or mutating SGF game trees.
///
/// All failures are local and synchronous; nothing is transient or retried.
/// Parse-time variants abort the whole collection; navigation and mutation
/// variants abort the current operation without rolling back earlier inserts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SgfError {
    #[error("empty collection")]
    EmptyCollection,

    #[error("empty game")]
    EmptyGame,

    #[error("empty branch")]
    EmptyBranch,

    #[error("duplicate property: {0}")]
    DuplicateProperty(String),

    #[error("no current game")]
    NoCurrentGame,

    #[error("no current node")]
    NoCurrentNode,

    #[error("dangling branch close")]
    DanglingBranch,

    #[error("unbalanced branches at end of game")]
    UnbalancedBranches,

    #[error("invalid variant: {choice} (fork width {width})")]
    InvalidVariant { choice: usize, width: usize },

    #[error("no variant: {0}")]
    NoVariant(usize),

    #[error("node already exists")]
    NodeAlreadyExists,
}

pub type SgfResult<T> = Result<T, SgfError>;
