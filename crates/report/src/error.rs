use thiserror::Error;

/// Errors raised while laying out or serializing the report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid report configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to encode page content: {0}")]
    Encode(String),
    #[error("failed to write document: {0}")]
    Write(String),
}
