use thiserror::Error;

/// A paragraph count that cannot be used. Raised before any fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("paragraphsQty is required")]
    Missing,
    #[error("paragraphsQty must be a non-negative integer")]
    NotAnInteger,
    #[error("paragraphsQty must be at most {max}")]
    TooLarge { max: u32 },
}

/// Failure to obtain paragraphs from a corpus source. Never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(String),
    /// The source could not be reached or the connection failed.
    #[error("corpus source unreachable: {0}")]
    Transport(String),
    #[error("corpus source answered with status {0}")]
    Status(u16),
    #[error("corpus source returned an unreadable body: {0}")]
    Decode(String),
}
