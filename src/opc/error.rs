/// Error types for OPC package operations.
use thiserror::Error;

/// Result type for OPC package operations.
pub type Result<T> = std::result::Result<T, OpcError>;

/// Error types for OPC package operations.
#[derive(Error, Debug)]
pub enum OpcError {
    /// Invalid part name
    #[error("Invalid part name: {0}")]
    InvalidPartName(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for OpcError {
    fn from(err: zip::result::ZipError) -> Self {
        OpcError::Zip(err.to_string())
    }
}
