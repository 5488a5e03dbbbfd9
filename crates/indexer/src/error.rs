use docsearch_backend::BackendError;
use docsearch_markdown::MarkdownError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Parse error: {0}")]
    Parse(#[from] MarkdownError),

    /// A block carried an element tag with no weight mapping. Emitting
    /// an unweighted record would corrupt ranking, so this is fatal.
    #[error("Unrecognized element tag: {0}")]
    UnknownTag(String),

    #[error("Staging write failed: {0}")]
    Write(#[source] BackendError),

    #[error("Settings configuration failed: {0}")]
    Settings(#[source] BackendError),

    #[error("Publish failed: {0}")]
    Publish(#[source] BackendError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid corpus path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    Other(String),
}
