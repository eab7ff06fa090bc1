use super::err::{InterpError, Result};
use crate::compile::pack::PackageProgram;
use std::io::Write;
use subleq_dynamics::{Exit, Runtime};

pub struct PackageRuntime {
    pub name: String,
    pub program: Vec<i64>,
}

impl From<PackageProgram> for PackageRuntime {
    fn from(PackageProgram { name, program }: PackageProgram) -> Self {
        PackageRuntime { name, program: program.into() }
    }
}

impl PackageRuntime {
    /// Run against stdout, for at most `fuel` steps if given.
    pub fn run(self, fuel: Option<u64>) -> Result<Exit> {
        let mut output = std::io::stdout().lock();
        self.run_with_output(fuel, &mut output)
    }
    pub fn run_with_output(self, fuel: Option<u64>, output: &mut dyn Write) -> Result<Exit> {
        let PackageRuntime { name, program } = self;
        log::info!("Interpreting program: {}", name);
        let exit = Runtime::new(&program, output).run(fuel)?;
        log::info!("Program stopped: {:?}", exit);
        Ok(exit)
    }
    /// Run with a step budget and check that the program halts having
    /// written exactly `expected`.
    pub fn test(self, expected: &[u8], fuel: u64, aloud: bool) -> Result<()> {
        let name = self.name.clone();
        let mut output = Vec::new();
        let exit = self.run_with_output(Some(fuel), &mut output)?;
        match exit {
            | Exit::Halted { .. } if output == expected => {
                if aloud {
                    use colored::Colorize;
                    let mut out = std::io::stdout();
                    let _ = writeln!(out, "test {} ... {}", name, "ok".green());
                }
                Ok(())
            }
            | Exit::Halted { steps } => {
                let err = format!(
                    "{} halted after {} steps with output {:?}, expected {:?}",
                    name,
                    steps,
                    String::from_utf8_lossy(&output),
                    String::from_utf8_lossy(expected)
                );
                Err(InterpError::TestFailed(err))?
            }
            | Exit::OutOfFuel { steps } => {
                let err = format!("{} did not halt within {} steps", name, steps);
                Err(InterpError::TestFailed(err))?
            }
        }
    }
}
