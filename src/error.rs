//! Error type shared by every component.

use thiserror::Error as ThisError;

/// Errors raised while building a graph or evaluating its cycles.
#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum Error {
    /// Requested node count is outside the allowed range.
    #[error("node count {n} must be between {min} and {max}")]
    InvalidSize { n: usize, min: usize, max: usize },

    /// Graph already holds its declared number of nodes.
    #[error("cannot add more than {capacity} nodes")]
    CapacityExceeded { capacity: usize },

    #[error("node with id {0} already exists")]
    DuplicateId(usize),

    #[error("node {0} does not exist")]
    UnknownNode(usize),

    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(usize),

    #[error("edge {from}-{to} already exists")]
    DuplicateEdge { from: usize, to: usize },

    /// No cycle to evaluate, i.e. no feasible route exists.
    #[error("no hamiltonian cycles to evaluate")]
    EmptyCycleSet,

    /// A cycle references a pair of nodes with no edge between them.
    #[error("no edge between nodes {from} and {to}")]
    MissingEdge { from: usize, to: usize },

    #[error("index {index} out of range for {len} results")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid node limits: min {min}, max {max}")]
    InvalidLimits { min: usize, max: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("logger init failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
