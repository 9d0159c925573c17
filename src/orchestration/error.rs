// Error types for content generation

use thiserror::Error;

/// Why a remote generation attempt was abandoned.
///
/// Never returned from `Orchestrator::generate`; every variant downgrades to
/// the fallback bundle and is only logged.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No credential supplied")]
    MissingCredential,

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::MalformedResponse(err.to_string())
    }
}

/// A profile that cannot be submitted for generation
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown marketing role: {0}")]
    UnknownRole(String),
}

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
