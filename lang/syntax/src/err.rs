use crate::span::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid token `{text}` at {span}")]
    InvalidToken { text: String, span: Span },
    #[error("integer `{text}` at {span} does not fit in a 64-bit cell")]
    IntegerOverflow { text: String, span: Span },
}

pub type Result<T> = std::result::Result<T, ParseError>;
