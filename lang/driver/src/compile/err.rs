use std::path::PathBuf;
use subleq_syntax::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Source file not found: `{}`", .0.display())]
    SrcFileNotFound(PathBuf),
    #[error("Source file at `{}` invalid: {}", .0.display(), .1)]
    SrcFileInvalid(PathBuf, std::io::Error),
    #[error("Parse error in `{0}`:\n\t{1}")]
    ParseError(String, ParseError),
    #[error("Unsupported target OS: {0}")]
    UnsupportedTargetOs(String),
}

pub type Result<T> = std::result::Result<T, CompileError>;
