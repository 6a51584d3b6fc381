/// Unified error handling module
use thiserror::Error;

/// Errors surfaced by launch data reads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network or protocol failure, carrying a human-readable message
    #[error("Transport error: {0}")]
    Transport(String),
    /// The source reported that the requested launch does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => {
                GatewayError::Transport(format!("Error Code: {}\nMessage: {}", status.as_u16(), err))
            }
            None => GatewayError::Transport(format!("Error: {}", err)),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Transport(format!("Malformed response body: {}", err))
    }
}

/// Type alias for gateway results
pub type GatewayResult<T> = Result<T, GatewayError>;
