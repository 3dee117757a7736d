use thiserror::Error;

/// Errors raised while rendering the distribution chart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A panel has no entries and cannot be plotted.
    #[error("panel '{0}' has no entries to plot")]
    EmptyPanel(&'static str),
    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),
    /// The plotting library rejected a drawing operation.
    #[error("chart drawing failed: {0}")]
    Drawing(String),
}
