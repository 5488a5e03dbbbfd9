use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkdownError>;

#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("Malformed document: {0}")]
    Parse(String),
}
