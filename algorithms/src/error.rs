use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("table size must be positive, got {size}")]
    InvalidSize { size: usize },
    #[error("table of size {size} is full; cannot place key #{step_number}")]
    CapacityExceeded { step_number: usize, size: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
