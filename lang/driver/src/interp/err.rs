use subleq_dynamics::DynamicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpError {
    #[error("Runtime error: {0}")]
    DynamicsError(#[from] DynamicsError),
    #[error("Test failed:\n\t{0}")]
    TestFailed(String),
}

pub type Result<T> = std::result::Result<T, InterpError>;
