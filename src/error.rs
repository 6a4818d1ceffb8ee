use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("index {index} out of bounds for series of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("series is not attached to a configuration")]
    NotAttached,

    #[error("series is already attached to a configuration")]
    AlreadyAttached,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
