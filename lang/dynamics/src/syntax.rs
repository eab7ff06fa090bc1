use crate::err::{DynamicsError, Result};
use derive_more::Deref;
use std::io::Write;
use subleq_syntax::EXTENSION_CELLS;

/* --------------------------------- Memory --------------------------------- */

/// The flat memory image shared by code and data.
#[derive(Clone, Debug, PartialEq, Eq, Deref)]
pub struct Memory(Vec<i64>);

impl Memory {
    /// The program cells followed by the zero-filled extension.
    pub fn new(program: &[i64]) -> Self {
        let mut cells = Vec::with_capacity(program.len() + EXTENSION_CELLS);
        cells.extend_from_slice(program);
        cells.resize(program.len() + EXTENSION_CELLS, 0);
        Self(cells)
    }
    pub fn read(&self, index: i64) -> Result<i64> {
        let slot = self.slot(index)?;
        Ok(self.0[slot])
    }
    pub fn write(&mut self, index: i64, value: i64) -> Result<()> {
        let slot = self.slot(index)?;
        self.0[slot] = value;
        Ok(())
    }
    fn slot(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < self.0.len())
            .ok_or(DynamicsError::OutOfRange { index, len: self.0.len() })
    }
}

/* --------------------------------- Runtime -------------------------------- */

pub struct Runtime<'rt> {
    pub output: &'rt mut dyn Write,
    pub memory: Memory,
    /// cell index of the next instruction; negative means halted
    pub pc: i64,
    /// number of instructions executed so far
    pub steps: u64,
}
