use thiserror::Error;

/// Main error type for relgraph
#[derive(Error, Debug)]
pub enum RelgraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source document is malformed XML; fatal, nothing can be extracted
    #[error("XML parse error: {0}")]
    Parse(String),

    /// A structurally required field is absent from a record
    #[error("Schema error: {0}")]
    Schema(String),

    /// No primary name or no Latin-script translation could be selected
    #[error("Name resolution error: {0}")]
    Resolution(String),
}

/// Convenient Result type using RelgraphError
pub type Result<T> = std::result::Result<T, RelgraphError>;
