use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynamicsError {
    #[error("out-of-range memory access at index {index} (memory has {len} cells)")]
    OutOfRange { index: i64, len: usize },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DynamicsError>;
