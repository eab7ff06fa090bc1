//! Program text for the subleq machine.
//!
//! A subleq program is nothing more than a list of signed 64-bit cells; the
//! order of the cells is their address. Text is a whitespace separated list of
//! decimal integers, where `#` and `;` start a comment that runs to the end of
//! the line and commas may be used as separators.

pub mod err;
pub mod lexer;
pub mod parse;
pub mod span;
pub mod syntax;

pub use err::{ParseError, Result};
pub use parse::parse_program;
pub use syntax::{EXTENSION_CELLS, IO_SENTINEL, Program};
