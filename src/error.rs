use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid node count: {0} (expected a positive integer)")]
    InvalidNodeCount(String),

    #[error("A network graph must be generated first")]
    NoGraphYet,

    #[error("Node {0} is not in the current graph")]
    NodeNotFound(NodeId),

    #[error("Invalid edge {from} - {to}: {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: String,
    },

    #[error("Option entered was not a number: {0:?}")]
    NotANumber(String),

    #[error("Invalid choice selected: {0}")]
    InvalidSelection(i64),

    #[error("Invalid generator setting {name} = {value}: {reason}")]
    InvalidGeneratorConfig {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("All-pairs computation cancelled")]
    Cancelled,

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde_json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Errors caused by user input, which the shell reports and moves past.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidNodeCount(_)
                | Error::NoGraphYet
                | Error::NodeNotFound(_)
                | Error::NotANumber(_)
                | Error::InvalidSelection(_)
        )
    }
}
