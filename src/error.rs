//! Error types for the simulator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("cannot summarize an empty population")]
    EmptyPopulation,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
