//! The x86-64 backend for subleq.
//!
//! A program becomes a `.data` image of 8-byte cells followed by a fixed
//! `.text` loop that interprets those cells natively. The program counter is
//! kept in r12 and the base of the memory image in r13.

pub mod emit;
pub mod syntax;

pub use emit::{Emitter, TargetFormat};

use std::fmt;

/// Translate `program` and write the listing to `out`.
pub fn emit_program(program: &[i64], format: TargetFormat, out: &mut dyn fmt::Write) -> fmt::Result {
    let file = Emitter::new(format).run(program);
    write!(out, "{}", file)
}
