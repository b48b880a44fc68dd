//! Error types raised while loading a friendship graph.

use thiserror::Error;

/// Failure to load a graph from an input source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("failed to read graph source: {0}")]
    Io(#[from] std::io::Error),

    /// The source was readable but its contents do not describe a graph.
    #[error("malformed graph data: {0}")]
    Malformed(#[from] MalformedData),
}

impl LoadError {
    /// True for content problems, false for I/O failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::Malformed(_))
    }
}

/// Ways an edge list can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedData {
    /// The source holds no tokens at all.
    #[error("missing edge count")]
    MissingEdgeCount,

    /// A token where a non-negative integer was expected.
    #[error("invalid integer {token:?} on line {line}")]
    InvalidInteger { token: String, line: usize },

    /// The source ran out before the declared number of pairs was read.
    #[error("expected {declared} friendship pairs, found {read}")]
    Truncated { declared: usize, read: usize },
}
