use derive_more::{Deref, DerefMut, From, Into};

/// The value of the `B` operand that turns a step into a character output.
pub const IO_SENTINEL: i64 = -1;

/// Zero cells appended after the program cells; 65536 bytes of 8-byte cells.
pub const EXTENSION_CELLS: usize = 8192;

/// An ordered list of memory cells; index `i` is address `i`.
///
/// Instructions are not a distinct representation: every three consecutive
/// cells starting at the program counter are read as `A`, `B` and `C`, and
/// any cell may be rewritten by the running program.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, From, Into, Deref, DerefMut)]
pub struct Program(Vec<i64>);

impl Program {
    pub fn new() -> Self {
        Self(Vec::new())
    }
    pub fn cells(&self) -> &[i64] {
        &self.0
    }
}
