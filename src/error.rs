/// Error types for fixture generation.
use thiserror::Error;

/// Result type for fixture generation.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Error types for fixture generation.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The presentation authoring capability was compiled out
    #[error(
        "presentation authoring support is not available: reinstall with `cargo install pptx-fixture` or rebuild with `--features pptx`"
    )]
    AuthoringUnavailable,

    /// OPC package error
    #[cfg(feature = "pptx")]
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::error::OpcError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
