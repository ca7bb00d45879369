/// Error types for scene building, file ingestion and snapshot delivery
use thiserror::Error;

/// Result type alias for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised by the scene store and transform stack
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("pop_matrix called with an empty transform stack")]
    EmptyTransformStack,

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while reading height maps and PLY meshes
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Input contains no data")]
    EmptyInput,
}

/// Errors raised by a snapshot transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Send failed: {0}")]
    Send(String),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
