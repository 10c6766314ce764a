use thiserror::Error;

/// Errors that can occur while talking to the stats service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
