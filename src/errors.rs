use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectorError {
    /// Raised only at construction time: non-positive viewport
    /// dimensions, non-positive density, or a zero tile size. The
    /// conversion operations themselves never fail.
    #[error("invalid projector configuration: {0}")]
    InvalidConfiguration(String),
}
