use crate::{err::Result, syntax::*};
use std::io::Write;
use subleq_syntax::IO_SENTINEL;

/// Outcome of a single instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Halt,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The program counter went negative.
    Halted { steps: u64 },
    /// The step budget ran out before the program halted. Programs are
    /// allowed to run forever, so this is not an error.
    OutOfFuel { steps: u64 },
}

impl<'rt> Runtime<'rt> {
    pub fn new(program: &[i64], output: &'rt mut dyn Write) -> Self {
        Runtime { output, memory: Memory::new(program), pc: 0, steps: 0 }
    }

    /// Fetch and execute the instruction at the program counter.
    pub fn step(&mut self) -> Result<Step> {
        let pc = self.pc;
        if pc < 0 {
            return Ok(Step::Halt);
        }
        let a = self.memory.read(pc)?;
        let b = self.memory.read(pc.saturating_add(1))?;
        let c = self.memory.read(pc.saturating_add(2))?;
        self.steps += 1;

        if b == IO_SENTINEL {
            // putchar writes the value as an unsigned char
            let value = self.memory.read(a)?;
            self.output.write_all(&[value as u8])?;
            self.pc = pc + 3;
            log::trace!("{:>6} pc={} print mem[{}]={}", self.steps, pc, a, value);
        } else {
            let value = self.memory.read(b)?.wrapping_sub(self.memory.read(a)?);
            self.memory.write(b, value)?;
            self.pc = if value <= 0 { c } else { pc + 3 };
            log::trace!("{:>6} pc={} mem[{}]={} next={}", self.steps, pc, b, value, self.pc);
        }
        Ok(Step::Continue)
    }

    /// Step until the program halts, or until `fuel` instructions have run.
    pub fn run(&mut self, fuel: Option<u64>) -> Result<Exit> {
        let exit = loop {
            if self.pc < 0 {
                break Exit::Halted { steps: self.steps };
            }
            if fuel.is_some_and(|fuel| self.steps >= fuel) {
                break Exit::OutOfFuel { steps: self.steps };
            }
            if let Step::Halt = self.step()? {
                break Exit::Halted { steps: self.steps };
            }
        };
        self.output.flush()?;
        log::debug!("stopped with {:?} at pc={}", exit, self.pc);
        Ok(exit)
    }
}
