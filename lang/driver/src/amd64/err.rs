use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Unsupported target architecture: {0}")]
    UnsupportedTargetArch(String),
    #[error("Failed to create build directory: {0}")]
    BuildDirError(io::Error),
    #[error("Failed to write to assembly file: {0}")]
    AssemblyWriteError(io::Error),
    #[error("Failed to run the assembler: {0}")]
    AssemblerRunError(io::Error),
    #[error("Failure in assembler call: {0}")]
    AssemblerOutputError(String),
    #[error("Failed to run the linker: {0}")]
    LinkerRunError(io::Error),
    #[error("Failure in linker call: {0}")]
    LinkerOutputError(String),
    #[error("Failed to run executable: {0}")]
    ExecutableRunError(io::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;
